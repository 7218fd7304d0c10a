//! Tariff aggregate
//!
//! Contains the rate table, the charge breakdown, and the hour-by-hour
//! classification engine.

pub mod engine;
pub mod model;

pub use engine::{billable_hours, classify_hour, is_night_hour, is_weekly_rush, TariffEngine};
pub use model::{ChargeBreakdown, HourSlice, RateTable, RateTier, VehicleRate};
