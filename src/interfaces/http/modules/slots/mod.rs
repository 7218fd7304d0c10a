//! Slot listing, arrivals and departures

pub mod dto;
pub mod handlers;

pub use handlers::*;
