//! Application layer
//!
//! Orchestrates the domain: allocation policy, reservation lifecycle,
//! departure billing and the locked `ParkingService` used by every adapter.

pub mod services;

// Re-export key types for convenience
pub use services::{
    ArrivalRequest, FacilityReport, OccupancyStats, ParkingBill, ParkingService, Placement,
    ReservationRequest, SharedParkingService,
};
