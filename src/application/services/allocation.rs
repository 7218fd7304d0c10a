//! Allocation policy
//!
//! Decides which slot a reservation or an arrival lands on. The functions
//! here run against a `&mut SlotRegistry` the caller already holds
//! exclusively, so the uniqueness and capacity checks and the mutation that
//! follows them are never interleaved with another request.

use chrono::NaiveDateTime;

use crate::domain::{
    normalize_plate, DomainError, DomainResult, OccupancyRecord, ReservationData,
    ReservationProvenance, ScanDirection, SlotNumber, SlotRegistry, VehicleType,
};

/// A vehicle at the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRequest {
    pub vehicle_type: VehicleType,
    pub vehicle_number: String,
    pub arrival: NaiveDateTime,
    pub expected_pickup: NaiveDateTime,
}

/// A booking made ahead of time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub customer_name: String,
    pub vehicle_type: VehicleType,
    pub vehicle_number: String,
    pub reserved_at: NaiveDateTime,
    pub duration_hours: u32,
}

/// Where an arrival was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub slot: SlotNumber,
    /// Set when the arrival consumed its own reservation
    pub reservation: Option<ReservationProvenance>,
}

/// Scan order for free slots: trucks fill from the far end.
pub fn scan_direction(vehicle_type: VehicleType) -> ScanDirection {
    match vehicle_type {
        VehicleType::Truck => ScanDirection::Descending,
        VehicleType::Car | VehicleType::Bike => ScanDirection::Ascending,
    }
}

/// Slot a new reservation for `plate` would take.
pub fn choose_reservation_slot(registry: &SlotRegistry, plate: &str) -> DomainResult<SlotNumber> {
    if let Some(existing) = registry.find_by_plate(plate) {
        return Err(DomainError::DuplicatePlate {
            plate: normalize_plate(plate),
            slot: existing.slot,
        });
    }

    registry
        .first_empty(ScanDirection::Ascending)
        .ok_or(DomainError::NoCapacity {
            capacity: registry.capacity(),
        })
}

/// Slot an arriving vehicle would take.
///
/// A reservation held under the same plate wins over the scan order.
pub fn choose_arrival_slot(
    registry: &SlotRegistry,
    plate: &str,
    vehicle_type: VehicleType,
) -> DomainResult<Placement> {
    if let Some(parked) = registry.find_parked(plate) {
        return Err(DomainError::DuplicatePlate {
            plate: normalize_plate(plate),
            slot: parked.slot,
        });
    }

    if let Some(reserved) = registry.find_reserved(plate) {
        return Ok(Placement {
            slot: reserved.slot,
            reservation: reserved.reservation().map(ReservationProvenance::from),
        });
    }

    registry
        .first_empty(scan_direction(vehicle_type))
        .map(|slot| Placement {
            slot,
            reservation: None,
        })
        .ok_or(DomainError::NoCapacity {
            capacity: registry.capacity(),
        })
}

/// Reserve the lowest free slot for the request.
pub fn place_reservation(
    registry: &mut SlotRegistry,
    request: ReservationRequest,
) -> DomainResult<SlotNumber> {
    let plate = normalize_plate(&request.vehicle_number);
    let slot = choose_reservation_slot(registry, &plate)?;

    registry.reserve(
        slot,
        ReservationData {
            customer_name: request.customer_name.trim().to_string(),
            vehicle_type: request.vehicle_type,
            vehicle_number: plate,
            reserved_at: request.reserved_at,
            duration_hours: request.duration_hours,
        },
    )?;
    Ok(slot)
}

/// Park an arriving vehicle.
pub fn place_arrival(
    registry: &mut SlotRegistry,
    request: ArrivalRequest,
) -> DomainResult<Placement> {
    let plate = normalize_plate(&request.vehicle_number);
    let placement = choose_arrival_slot(registry, &plate, request.vehicle_type)?;

    let mut record = OccupancyRecord::new(
        request.vehicle_type,
        plate,
        request.arrival,
        request.expected_pickup,
    );
    if let Some(provenance) = placement.reservation.clone() {
        record = record.with_provenance(provenance);
    }

    registry.occupy(placement.slot, record)?;
    Ok(placement)
}

// ── Tests ──────────────────────────────────────────────────────
