//! Reservation DTOs

use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ReservationRequest;
use crate::domain::VehicleType;
use crate::interfaces::http::common::validation::{validate_not_blank, validate_plate};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    #[validate(
        length(min = 1, max = 100, message = "customer name must be 1-100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub customer_name: String,
    #[schema(value_type = String, example = "Car")]
    pub vehicle_type: VehicleType,
    /// Letters and digits, 4-20 characters
    #[validate(
        length(max = 20, message = "vehicle number must be at most 20 characters"),
        custom(function = "validate_plate")
    )]
    pub vehicle_number: String,
    /// Date and time the customer expects to arrive
    pub reserved_at: NaiveDateTime,
    #[validate(range(min = 1, max = 720, message = "duration must be 1-720 hours"))]
    pub duration_hours: u32,
}

impl From<CreateReservationRequest> for ReservationRequest {
    fn from(r: CreateReservationRequest) -> Self {
        Self {
            customer_name: r.customer_name,
            vehicle_type: r.vehicle_type,
            vehicle_number: r.vehicle_number,
            reserved_at: r.reserved_at,
            duration_hours: r.duration_hours,
        }
    }
}
