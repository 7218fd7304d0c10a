//! Application services

pub mod allocation;
pub mod billing;
mod parking;
pub mod reports;
pub mod reservation;

pub use allocation::{ArrivalRequest, Placement, ReservationRequest};
pub use billing::ParkingBill;
pub use parking::{ParkingService, SharedParkingService};
pub use reports::{FacilityReport, OccupancyStats, SearchTerm};
