//! Slot aggregate
//!
//! Contains the Slot entity, its status variants, and the registry that owns
//! every slot of the facility.

pub mod model;
pub mod registry;

pub use model::{
    OccupancyRecord, ReservationData, ReservationProvenance, Slot, SlotNumber, SlotState,
    SlotStatus,
};
pub use registry::{ScanDirection, SlotCounts, SlotRegistry};
