pub mod health;
pub mod holidays;
pub mod metrics;
pub mod reports;
pub mod request_id;
pub mod reservations;
pub mod slots;
pub mod tariffs;
