//! Occupancy statistics, facility report and vehicle search

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{normalize_plate, Slot, SlotNumber, SlotRegistry, VehicleType};

/// Headline numbers for the facility
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    /// Share of slots holding a parked vehicle, in percent
    pub occupancy_rate: f64,
    /// Sum of the charges left on slots by their last departure
    pub revenue: i64,
}

impl OccupancyStats {
    pub fn from_registry(registry: &SlotRegistry) -> Self {
        let counts = registry.counts();
        let total = registry.capacity();
        let occupancy_rate = if total == 0 {
            0.0
        } else {
            counts.occupied as f64 / total as f64 * 100.0
        };

        Self {
            total,
            available: counts.empty,
            occupied: counts.occupied,
            reserved: counts.reserved,
            occupancy_rate,
            revenue: registry.slots().iter().map(|s| s.charge).sum(),
        }
    }
}

/// Full facility report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityReport {
    pub stats: OccupancyStats,
    /// Parked vehicles per class
    pub vehicles_by_type: BTreeMap<VehicleType, usize>,
    /// Reservations per class
    pub reservations_by_type: BTreeMap<VehicleType, usize>,
    pub average_revenue_per_slot: f64,
    pub currency: String,
}

impl FacilityReport {
    pub fn from_registry(registry: &SlotRegistry, currency: &str) -> Self {
        let stats = OccupancyStats::from_registry(registry);

        let mut vehicles_by_type: BTreeMap<VehicleType, usize> =
            VehicleType::ALL.iter().map(|t| (*t, 0)).collect();
        let mut reservations_by_type = vehicles_by_type.clone();

        for slot in registry.slots() {
            if let Some(occ) = slot.occupancy() {
                *vehicles_by_type.entry(occ.vehicle_type).or_default() += 1;
            } else if let Some(res) = slot.reservation() {
                *reservations_by_type.entry(res.vehicle_type).or_default() += 1;
            }
        }

        let average_revenue_per_slot = if stats.total == 0 {
            0.0
        } else {
            stats.revenue as f64 / stats.total as f64
        };

        Self {
            stats,
            vehicles_by_type,
            reservations_by_type,
            average_revenue_per_slot,
            currency: currency.to_string(),
        }
    }
}

/// What a search term refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    Slot(SlotNumber),
    Plate(String),
}

impl SearchTerm {
    /// All-digit terms are slot numbers, anything else a plate fragment.
    pub fn parse(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        if term.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(slot) = term.parse() {
                return Some(Self::Slot(slot));
            }
        }
        Some(Self::Plate(normalize_plate(term)))
    }
}

/// Slots matching `term`, in slot order.
///
/// Plate fragments match parked and reserved vehicles case-insensitively.
pub fn search(registry: &SlotRegistry, term: &str) -> Vec<Slot> {
    match SearchTerm::parse(term) {
        Some(SearchTerm::Slot(n)) => registry.get(n).ok().cloned().into_iter().collect(),
        Some(SearchTerm::Plate(fragment)) => registry
            .slots()
            .iter()
            .filter(|s| s.plate().is_some_and(|p| p.contains(&fragment)))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OccupancyRecord, ReservationData};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 3)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample() -> SlotRegistry {
        let mut reg = SlotRegistry::new(4);
        reg.occupy(
            1,
            OccupancyRecord::new(VehicleType::Car, "KA01AB1234", at(9), at(12)),
        )
        .unwrap();
        reg.occupy(
            4,
            OccupancyRecord::new(VehicleType::Truck, "MH12TR0001", at(9), at(12)),
        )
        .unwrap();
        reg.reserve(
            2,
            ReservationData {
                customer_name: "John Doe".into(),
                vehicle_type: VehicleType::Bike,
                vehicle_number: "WB11X1234".into(),
                reserved_at: at(14),
                duration_hours: 2,
            },
        )
        .unwrap();
        reg.clear(3, 45_000).unwrap();
        reg
    }

    #[test]
    fn stats_count_each_status() {
        let stats = OccupancyStats::from_registry(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.occupied, 2);
        assert_eq!(stats.reserved, 1);
        assert_eq!(stats.occupancy_rate, 50.0);
        assert_eq!(stats.revenue, 45_000);
    }

    #[test]
    fn report_breaks_down_by_class() {
        let report = FacilityReport::from_registry(&sample(), "INR");
        assert_eq!(report.vehicles_by_type[&VehicleType::Car], 1);
        assert_eq!(report.vehicles_by_type[&VehicleType::Truck], 1);
        assert_eq!(report.vehicles_by_type[&VehicleType::Bike], 0);
        assert_eq!(report.reservations_by_type[&VehicleType::Bike], 1);
        assert_eq!(report.average_revenue_per_slot, 11_250.0);
    }

    #[test]
    fn search_by_plate_fragment() {
        let reg = sample();
        let hits = search(&reg, "1234");
        // "1234" is all digits, so it is a slot number out of range
        assert!(hits.is_empty());

        let hits = search(&reg, "ab1234");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slot, 1);

        let hits = search(&reg, "x12");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slot, 2);

        let hits = search(&reg, "A");
        assert_eq!(
            hits.iter().map(|s| s.slot).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn search_by_slot_number() {
        let reg = sample();
        let hits = search(&reg, " 3 ");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_empty());
        assert!(search(&reg, "").is_empty());
        assert!(search(&reg, "99").is_empty());
    }
}
