//! Shared state handed to every handler

use std::sync::Arc;
use std::time::Instant;

use crate::application::SharedParkingService;

#[derive(Clone)]
pub struct AppState {
    pub parking: SharedParkingService,
    pub facility_name: String,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(parking: SharedParkingService, facility_name: impl Into<String>) -> Self {
        Self {
            parking,
            facility_name: facility_name.into(),
            started_at: Arc::new(Instant::now()),
        }
    }
}
