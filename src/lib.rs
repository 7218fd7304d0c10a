//! # Texnouz Parking
//!
//! Slot allocation and tariff engine for a single parking facility.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: slots, holiday calendar, rate table, tariff engine, clock port
//! - **application**: allocation policy, reservation lifecycle, billing and the
//!   `ParkingService` that serializes every state change
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML configuration
//! - **server**: runtime lifecycle and tracing setup
//! - **support**: errors, time formats, graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export API router
pub use interfaces::http::create_api_router;
