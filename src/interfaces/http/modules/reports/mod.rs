//! Facility report and vehicle search

pub mod dto;
pub mod handlers;

pub use handlers::*;
