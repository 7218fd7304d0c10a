//! Facility snapshot: the persisted-state shape
//!
//! A flat array of slot records plus the holiday calendar. Collaborators own
//! where it is stored; the core only produces it and re-hydrates from it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::holiday::{HolidayCalendar, HolidayRecord};
use super::slot::{Slot, SlotRegistry};
use crate::support::errors::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub taken_at: NaiveDateTime,
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

impl FacilitySnapshot {
    pub fn capture(
        registry: &SlotRegistry,
        calendar: &HolidayCalendar,
        taken_at: NaiveDateTime,
    ) -> Self {
        Self {
            taken_at,
            slots: registry.slots().to_vec(),
            holidays: calendar.records().to_vec(),
        }
    }

    /// Rebuild the registry and calendar without touching stored fields.
    pub fn into_parts(self) -> DomainResult<(SlotRegistry, HolidayCalendar)> {
        let registry = SlotRegistry::from_slots(self.slots)?;
        Ok((registry, HolidayCalendar::new(self.holidays)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slot::{OccupancyRecord, ReservationData};
    use crate::domain::vehicle::VehicleType;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn restores_registry_from_json_document() {
        let mut reg = SlotRegistry::new(4);
        reg.occupy(
            2,
            OccupancyRecord::new(VehicleType::Bike, "WB02B5678", at(1, 9), at(1, 12)),
        )
        .unwrap();
        reg.reserve(
            3,
            ReservationData {
                customer_name: "John Doe".into(),
                vehicle_type: VehicleType::Car,
                vehicle_number: "WB11X1234".into(),
                reserved_at: at(1, 14),
                duration_hours: 3,
            },
        )
        .unwrap();
        reg.clear(4, 40_000).unwrap();

        let snapshot = FacilitySnapshot::capture(&reg, &HolidayCalendar::default(), at(1, 15));
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: FacilitySnapshot = serde_json::from_str(&json).unwrap();
        let (restored, calendar) = parsed.into_parts().unwrap();

        assert_eq!(restored.slots(), reg.slots());
        assert!(calendar.is_empty());
        assert_eq!(restored.get(4).unwrap().charge, 40_000);
    }

    #[test]
    fn rejects_broken_documents() {
        let snapshot = FacilitySnapshot {
            taken_at: at(1, 0),
            slots: vec![Slot::empty(1), Slot::empty(1)],
            holidays: Vec::new(),
        };
        assert!(snapshot.into_parts().is_err());
    }
}
