//! Holiday aggregate
//!
//! Named holidays with custom rush windows, consulted read-only by the tariff
//! engine.

pub mod model;

pub use model::{HolidayCalendar, HolidayRecord, RushWindow};
