use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::SlotNumber;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Vehicle {plate} is already registered in slot {slot}")]
    DuplicatePlate { plate: String, slot: SlotNumber },

    #[error("No available slots (capacity {capacity})")]
    NoCapacity { capacity: usize },

    #[error("Slot {slot} is not reserved")]
    NotReserved { slot: SlotNumber },

    #[error("Slot {slot} is empty")]
    SlotEmpty { slot: SlotNumber },

    #[error("Departure {departure} is before arrival {arrival}")]
    InvalidInterval {
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
    },

    #[error("Slot {slot} does not exist (facility has {capacity} slots)")]
    SlotNotFound { slot: SlotNumber, capacity: usize },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl DomainError {
    /// Short machine-readable reason, used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::DuplicatePlate { .. } => "duplicate_plate",
            Self::NoCapacity { .. } => "no_capacity",
            Self::NotReserved { .. } => "not_reserved",
            Self::SlotEmpty { .. } => "slot_empty",
            Self::InvalidInterval { .. } => "invalid_interval",
            Self::SlotNotFound { .. } => "slot_not_found",
            Self::InvalidSnapshot(_) => "invalid_snapshot",
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
