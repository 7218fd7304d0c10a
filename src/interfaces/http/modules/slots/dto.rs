//! Slot DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::ParkingBill;
use crate::domain::{RateTable, Slot, VehicleType};
use crate::interfaces::http::common::validation::{validate_plate, validate_stay};
use crate::interfaces::http::modules::tariffs::dto::ChargeBreakdownResponse;
use crate::support::time::format_instant;

/// Vehicle currently parked in a slot
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParkedVehicleResponse {
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub arrival: NaiveDateTime,
    pub expected_pickup: NaiveDateTime,
    /// Day of week of the arrival, e.g. `Mon`
    pub weekday: String,
    /// Customer of the reservation this stay came from
    pub reserved_by: Option<String>,
    pub reserved_at: Option<NaiveDateTime>,
}

/// Reservation held on a slot
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationInfoResponse {
    pub customer_name: String,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub reserved_at: NaiveDateTime,
    pub duration_hours: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotResponse {
    pub slot: u32,
    /// `Empty`, `Reserved` or `Occupied`
    pub status: String,
    /// Charge left by the last departure, in minor units
    pub charge: i64,
    pub charge_display: String,
    pub vehicle: Option<ParkedVehicleResponse>,
    pub reservation: Option<ReservationInfoResponse>,
}

impl SlotResponse {
    pub fn from_slot(slot: &Slot, rates: &RateTable) -> Self {
        let vehicle = slot.occupancy().map(|o| ParkedVehicleResponse {
            vehicle_type: o.vehicle_type.to_string(),
            vehicle_number: o.vehicle_number.clone(),
            arrival: o.arrival,
            expected_pickup: o.expected_pickup,
            weekday: o.weekday.to_string(),
            reserved_by: o
                .original_reservation
                .as_ref()
                .map(|r| r.customer_name.clone()),
            reserved_at: o.original_reservation.as_ref().map(|r| r.reserved_at),
        });
        let reservation = slot.reservation().map(|r| ReservationInfoResponse {
            customer_name: r.customer_name.clone(),
            vehicle_type: r.vehicle_type.to_string(),
            vehicle_number: r.vehicle_number.clone(),
            reserved_at: r.reserved_at,
            duration_hours: r.duration_hours,
        });

        Self {
            slot: slot.slot,
            status: slot.status().to_string(),
            charge: slot.charge,
            charge_display: rates.format(slot.charge),
            vehicle,
            reservation,
        }
    }
}

/// Vehicle arriving at the gate
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_arrival_window"))]
pub struct ArrivalRequest {
    #[schema(value_type = String, example = "Car")]
    pub vehicle_type: VehicleType,
    /// Letters and digits, 4-20 characters
    #[validate(
        length(max = 20, message = "vehicle number must be at most 20 characters"),
        custom(function = "validate_plate")
    )]
    pub vehicle_number: String,
    /// Defaults to the current time
    pub arrival: Option<NaiveDateTime>,
    /// After `arrival`, at most 72 hours later
    pub expected_pickup: NaiveDateTime,
}

fn validate_arrival_window(req: &ArrivalRequest) -> Result<(), ValidationError> {
    match req.arrival {
        Some(arrival) => validate_stay(arrival, req.expected_pickup),
        // checked against the clock once the handler fills it in
        None => Ok(()),
    }
}

/// Body of a departure; may be omitted entirely.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct DepartureRequest {
    /// Defaults to the current time
    pub departure: Option<NaiveDateTime>,
}

/// Receipt for a departed vehicle
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParkingBillResponse {
    pub slot: u32,
    pub vehicle_type: String,
    pub vehicle_number: String,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    /// `dd-mm-YYYY HH:MM`, as printed on the receipt
    pub arrival_display: String,
    pub departure_display: String,
    pub reserved_by: Option<String>,
    pub breakdown: ChargeBreakdownResponse,
}

impl From<ParkingBill> for ParkingBillResponse {
    fn from(bill: ParkingBill) -> Self {
        Self {
            slot: bill.slot,
            vehicle_type: bill.vehicle_type.to_string(),
            vehicle_number: bill.vehicle_number,
            arrival: bill.arrival,
            departure: bill.departure,
            arrival_display: format_instant(bill.arrival),
            departure_display: format_instant(bill.departure),
            reserved_by: bill.original_reservation.map(|r| r.customer_name),
            breakdown: bill.breakdown.into(),
        }
    }
}
