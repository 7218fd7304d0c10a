//! Slot registry: owns the state of every slot in the facility

use std::collections::HashMap;

use crate::domain::vehicle::normalize_plate;
use crate::support::errors::{DomainError, DomainResult};

use super::model::{OccupancyRecord, ReservationData, Slot, SlotNumber, SlotState, SlotStatus};

/// Scan order used when looking for a free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// From slot 1 upwards
    Ascending,
    /// From the highest slot downwards
    Descending,
}

/// Per-status slot counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCounts {
    pub empty: usize,
    pub reserved: usize,
    pub occupied: usize,
}

/// Fixed-size, ordered collection of slots.
///
/// Mutations only check that the slot number exists; whether a transition is
/// allowed is decided by the allocation policy before calling them.
#[derive(Debug, Clone)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
}

impl SlotRegistry {
    /// Create a registry of `capacity` empty slots numbered `1..=capacity`.
    pub fn new(capacity: usize) -> Self {
        let slots = (1..=capacity as SlotNumber).map(Slot::empty).collect();
        Self { slots }
    }

    /// Re-hydrate from stored slot records.
    ///
    /// Records are taken as-is; only numbering and plate uniqueness are
    /// checked.
    pub fn from_slots(mut slots: Vec<Slot>) -> DomainResult<Self> {
        if slots.is_empty() {
            return Err(DomainError::InvalidSnapshot(
                "snapshot contains no slots".to_string(),
            ));
        }

        slots.sort_by_key(|s| s.slot);
        for (i, slot) in slots.iter().enumerate() {
            let expected = i as SlotNumber + 1;
            if slot.slot != expected {
                return Err(DomainError::InvalidSnapshot(format!(
                    "expected slot {} but found slot {}",
                    expected, slot.slot
                )));
            }
        }

        let mut seen: HashMap<String, SlotNumber> = HashMap::new();
        for slot in &slots {
            if let Some(plate) = slot.plate() {
                if let Some(first) = seen.insert(normalize_plate(plate), slot.slot) {
                    return Err(DomainError::InvalidSnapshot(format!(
                        "plate {} appears in slots {} and {}",
                        plate, first, slot.slot
                    )));
                }
            }
        }

        Ok(Self { slots })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, slot: SlotNumber) -> DomainResult<&Slot> {
        let capacity = self.capacity();
        slot.checked_sub(1)
            .and_then(|i| self.slots.get(i as usize))
            .ok_or(DomainError::SlotNotFound { slot, capacity })
    }

    fn get_mut(&mut self, slot: SlotNumber) -> DomainResult<&mut Slot> {
        let capacity = self.capacity();
        slot.checked_sub(1)
            .and_then(|i| self.slots.get_mut(i as usize))
            .ok_or(DomainError::SlotNotFound { slot, capacity })
    }

    /// Slot holding `plate`, parked or reserved.
    pub fn find_by_plate(&self, plate: &str) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|s| s.is_parked(plate) || s.is_reserved_for(plate))
    }

    /// Slot where `plate` is currently parked.
    pub fn find_parked(&self, plate: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.is_parked(plate))
    }

    /// Slot reserved for `plate`.
    pub fn find_reserved(&self, plate: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.is_reserved_for(plate))
    }

    /// First `Empty` slot in the given scan order.
    pub fn first_empty(&self, direction: ScanDirection) -> Option<SlotNumber> {
        match direction {
            ScanDirection::Ascending => self.slots.iter().find(|s| s.is_empty()),
            ScanDirection::Descending => self.slots.iter().rev().find(|s| s.is_empty()),
        }
        .map(|s| s.slot)
    }

    pub fn occupy(&mut self, slot: SlotNumber, record: OccupancyRecord) -> DomainResult<()> {
        let entry = self.get_mut(slot)?;
        entry.state = SlotState::Occupied(record);
        entry.charge = 0;
        Ok(())
    }

    pub fn reserve(&mut self, slot: SlotNumber, data: ReservationData) -> DomainResult<()> {
        let entry = self.get_mut(slot)?;
        entry.state = SlotState::Reserved(data);
        entry.charge = 0;
        Ok(())
    }

    /// Empty the slot, leaving `charge` behind for display.
    pub fn clear(&mut self, slot: SlotNumber, charge: i64) -> DomainResult<SlotState> {
        let entry = self.get_mut(slot)?;
        entry.charge = charge;
        Ok(std::mem::replace(&mut entry.state, SlotState::Empty))
    }

    pub fn counts(&self) -> SlotCounts {
        self.slots
            .iter()
            .fold(SlotCounts::default(), |mut acc, s| {
                match s.status() {
                    SlotStatus::Empty => acc.empty += 1,
                    SlotStatus::Reserved => acc.reserved += 1,
                    SlotStatus::Occupied => acc.occupied += 1,
                }
                acc
            })
    }
}

// ── Tests ──────────────────────────────────────────────────────
