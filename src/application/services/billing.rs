//! Departure billing

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{
    ChargeBreakdown, DomainError, DomainResult, ReservationProvenance, SlotNumber, SlotRegistry,
    TariffEngine, VehicleType,
};

/// Receipt for a vehicle leaving the facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingBill {
    pub slot: SlotNumber,
    pub vehicle_type: VehicleType,
    pub vehicle_number: String,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_reservation: Option<ReservationProvenance>,
    pub breakdown: ChargeBreakdown,
}

impl ParkingBill {
    pub fn total(&self) -> i64 {
        self.breakdown.total
    }
}

/// Bill the vehicle in `slot` and empty the slot.
///
/// The charge is computed before anything is written, so a rejected
/// interval leaves the slot occupied.
pub fn remove_and_bill(
    registry: &mut SlotRegistry,
    engine: &TariffEngine,
    slot: SlotNumber,
    departure: NaiveDateTime,
) -> DomainResult<ParkingBill> {
    let occupancy = registry
        .get(slot)?
        .occupancy()
        .cloned()
        .ok_or(DomainError::SlotEmpty { slot })?;

    let breakdown =
        engine.calculate_charge(occupancy.arrival, departure, occupancy.vehicle_type)?;

    registry.clear(slot, breakdown.total)?;

    Ok(ParkingBill {
        slot,
        vehicle_type: occupancy.vehicle_type,
        vehicle_number: occupancy.vehicle_number,
        arrival: occupancy.arrival,
        departure,
        original_reservation: occupancy.original_reservation,
        breakdown,
    })
}
