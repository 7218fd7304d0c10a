//! Reservation lifecycle: turning a booking into a parked vehicle, or
//! dropping it.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{
    DomainError, DomainResult, OccupancyRecord, ReservationData, ReservationProvenance,
    SlotNumber, SlotRegistry, SlotState,
};

fn reserved(registry: &SlotRegistry, slot: SlotNumber) -> DomainResult<ReservationData> {
    registry
        .get(slot)?
        .reservation()
        .cloned()
        .ok_or(DomainError::NotReserved { slot })
}

/// Occupy a reserved slot as of `now`.
///
/// The booked duration is counted from `now`, not from the reserved instant.
pub fn convert(
    registry: &mut SlotRegistry,
    slot: SlotNumber,
    now: NaiveDateTime,
) -> DomainResult<OccupancyRecord> {
    let reservation = reserved(registry, slot)?;

    let record = OccupancyRecord::new(
        reservation.vehicle_type,
        reservation.vehicle_number.clone(),
        now,
        now + Duration::hours(i64::from(reservation.duration_hours)),
    )
    .with_provenance(ReservationProvenance::from(&reservation));

    registry.occupy(slot, record.clone())?;
    Ok(record)
}

/// Release a reserved slot.
pub fn cancel(registry: &mut SlotRegistry, slot: SlotNumber) -> DomainResult<ReservationData> {
    let reservation = reserved(registry, slot)?;
    match registry.clear(slot, 0)? {
        SlotState::Reserved(_) => Ok(reservation),
        // `reserved` just checked the state under the same borrow
        _ => Err(DomainError::NotReserved { slot }),
    }
}
