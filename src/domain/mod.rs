//! Domain layer
//!
//! - `slot`: slot entity, status variants and the slot registry
//! - `holiday`: holiday calendar with per-date rush windows
//! - `tariff`: rate table and the hour-by-hour tariff engine
//! - `vehicle`: vehicle classes and plate normalization
//! - `ports`: interfaces provided by the environment (clock)
//! - `snapshot`: persisted-state shape

pub mod holiday;
pub mod ports;
pub mod slot;
pub mod snapshot;
pub mod tariff;
pub mod vehicle;

pub use holiday::{HolidayCalendar, HolidayRecord, RushWindow};
pub use ports::{Clock, FixedClock, SharedClock, SystemClock};
pub use slot::{
    OccupancyRecord, ReservationData, ReservationProvenance, ScanDirection, Slot, SlotCounts,
    SlotNumber, SlotRegistry, SlotState, SlotStatus,
};
pub use snapshot::FacilitySnapshot;
pub use tariff::{ChargeBreakdown, HourSlice, RateTable, RateTier, TariffEngine, VehicleRate};
pub use vehicle::{normalize_plate, VehicleType};

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
