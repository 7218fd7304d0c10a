//! Reservations: booking, conversion on arrival and cancellation

pub mod dto;
pub mod handlers;

pub use handlers::*;
