//! Slot domain entity

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::{same_plate, VehicleType};

/// 1-based physical slot number.
pub type SlotNumber = u32;

/// Reservation held on a slot until the vehicle arrives or it is cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationData {
    pub customer_name: String,
    pub vehicle_type: VehicleType,
    /// Uppercase plate
    pub vehicle_number: String,
    /// Date and time the customer booked for
    pub reserved_at: NaiveDateTime,
    pub duration_hours: u32,
}

/// Where an occupancy came from when it replaced a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationProvenance {
    pub customer_name: String,
    pub reserved_at: NaiveDateTime,
}

impl From<&ReservationData> for ReservationProvenance {
    fn from(r: &ReservationData) -> Self {
        Self {
            customer_name: r.customer_name.clone(),
            reserved_at: r.reserved_at,
        }
    }
}

/// A parked vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRecord {
    pub vehicle_type: VehicleType,
    /// Uppercase plate
    pub vehicle_number: String,
    pub arrival: NaiveDateTime,
    pub expected_pickup: NaiveDateTime,
    /// Day of week of `arrival`, stored as recorded
    pub weekday: Weekday,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_reservation: Option<ReservationProvenance>,
}

impl OccupancyRecord {
    pub fn new(
        vehicle_type: VehicleType,
        vehicle_number: impl Into<String>,
        arrival: NaiveDateTime,
        expected_pickup: NaiveDateTime,
    ) -> Self {
        Self {
            vehicle_type,
            vehicle_number: vehicle_number.into(),
            arrival,
            expected_pickup,
            weekday: arrival.weekday(),
            original_reservation: None,
        }
    }

    pub fn with_provenance(mut self, provenance: ReservationProvenance) -> Self {
        self.original_reservation = Some(provenance);
        self
    }
}

/// Slot status; each variant carries only the fields valid for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data")]
pub enum SlotState {
    Empty,
    Reserved(ReservationData),
    Occupied(OccupancyRecord),
}

/// Slot status without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Empty,
    Reserved,
    Occupied,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Reserved => "Reserved",
            Self::Occupied => "Occupied",
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One physical parking space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub slot: SlotNumber,
    pub state: SlotState,
    /// Last computed charge in minor units. Survives departure until the
    /// slot is reused.
    #[serde(default)]
    pub charge: i64,
}

impl Slot {
    pub fn empty(slot: SlotNumber) -> Self {
        Self {
            slot,
            state: SlotState::Empty,
            charge: 0,
        }
    }

    pub fn status(&self) -> SlotStatus {
        match self.state {
            SlotState::Empty => SlotStatus::Empty,
            SlotState::Reserved(_) => SlotStatus::Reserved,
            SlotState::Occupied(_) => SlotStatus::Occupied,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    pub fn occupancy(&self) -> Option<&OccupancyRecord> {
        match &self.state {
            SlotState::Occupied(record) => Some(record),
            _ => None,
        }
    }

    pub fn reservation(&self) -> Option<&ReservationData> {
        match &self.state {
            SlotState::Reserved(data) => Some(data),
            _ => None,
        }
    }

    /// Plate held by this slot, parked or reserved.
    pub fn plate(&self) -> Option<&str> {
        match &self.state {
            SlotState::Empty => None,
            SlotState::Reserved(data) => Some(&data.vehicle_number),
            SlotState::Occupied(record) => Some(&record.vehicle_number),
        }
    }

    pub fn is_parked(&self, plate: &str) -> bool {
        self.occupancy()
            .is_some_and(|r| same_plate(&r.vehicle_number, plate))
    }

    pub fn is_reserved_for(&self, plate: &str) -> bool {
        self.reservation()
            .is_some_and(|r| same_plate(&r.vehicle_number, plate))
    }
}

// ── Tests ──────────────────────────────────────────────────────
