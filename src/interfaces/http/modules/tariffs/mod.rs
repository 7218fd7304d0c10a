//! Tariff preview and rate table

pub mod dto;
pub mod handlers;

pub use handlers::*;
