//! HTTP REST API interfaces
//!
//! - `common`: response envelope, domain error mapping, validated JSON
//! - `modules`: handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

pub use router::create_api_router;
pub use state::AppState;
