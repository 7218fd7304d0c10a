//! Rate table and charge breakdown

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::VehicleType;
use crate::support::time::format_money;

/// Billing tier of one hour of a stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateTier {
    Standard,
    Rush,
    Night,
}

impl RateTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Rush => "Rush",
            Self::Night => "Night",
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hourly pricing for one vehicle class (in smallest currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRate {
    pub standard: i64,
    /// Added to `standard` for rush hours
    pub rush_surcharge: i64,
}

impl VehicleRate {
    pub const fn new(standard: i64, rush_surcharge: i64) -> Self {
        Self {
            standard,
            rush_surcharge,
        }
    }

    pub fn rush(&self) -> i64 {
        self.standard + self.rush_surcharge
    }
}

/// Facility price list.
///
/// Amounts are in the smallest currency unit (paise for INR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub currency: String,
    pub car: VehicleRate,
    pub bike: VehicleRate,
    pub truck: VehicleRate,
    /// Flat hourly rate between 23:00 and 05:00, for every class
    pub night_rate: i64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            car: VehicleRate::new(15_000, 3_000),
            bike: VehicleRate::new(20_000, 5_000),
            truck: VehicleRate::new(30_000, 7_000),
            night_rate: 10_000,
        }
    }
}

impl RateTable {
    pub fn for_vehicle(&self, vehicle_type: VehicleType) -> VehicleRate {
        match vehicle_type {
            VehicleType::Car => self.car,
            VehicleType::Bike => self.bike,
            VehicleType::Truck => self.truck,
        }
    }

    /// Hourly rate of a tier for a vehicle class
    pub fn hourly(&self, vehicle_type: VehicleType, tier: RateTier) -> i64 {
        match tier {
            RateTier::Standard => self.for_vehicle(vehicle_type).standard,
            RateTier::Rush => self.for_vehicle(vehicle_type).rush(),
            RateTier::Night => self.night_rate,
        }
    }

    pub fn format(&self, amount: i64) -> String {
        format_money(amount, &self.currency)
    }
}

/// Classification of one billed hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlice {
    pub starts_at: NaiveDateTime,
    pub tier: RateTier,
}

/// Itemized charge for a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub vehicle_type: VehicleType,
    pub total_hours: u32,
    pub standard_hours: u32,
    pub rush_hours: u32,
    pub night_hours: u32,
    pub standard_rate: i64,
    pub rush_rate: i64,
    pub night_rate: i64,
    pub standard_charge: i64,
    pub rush_charge: i64,
    pub night_charge: i64,
    pub total: i64,
    pub currency: String,
    pub hours: Vec<HourSlice>,
}

impl ChargeBreakdown {
    pub fn format_total(&self) -> String {
        format_money(self.total, &self.currency)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates() {
        let r = RateTable::default();
        assert_eq!(r.hourly(VehicleType::Car, RateTier::Standard), 15_000);
        assert_eq!(r.hourly(VehicleType::Car, RateTier::Rush), 18_000);
        assert_eq!(r.hourly(VehicleType::Bike, RateTier::Rush), 25_000);
        assert_eq!(r.hourly(VehicleType::Truck, RateTier::Rush), 37_000);
        assert_eq!(r.hourly(VehicleType::Truck, RateTier::Night), 10_000);
        assert_eq!(r.hourly(VehicleType::Bike, RateTier::Night), 10_000);
    }

    #[test]
    fn partial_rate_table_falls_back_to_defaults() {
        let r: RateTable = serde_json::from_str(r#"{"night_rate": 8000}"#).unwrap();
        assert_eq!(r.night_rate, 8_000);
        assert_eq!(r.car, RateTable::default().car);
        assert_eq!(r.currency, "INR");
    }

    #[test]
    fn format_amounts() {
        assert_eq!(RateTable::default().format(120_000), "1200.00 INR");
    }

    #[test]
    fn tier_display() {
        assert_eq!(RateTier::Night.to_string(), "Night");
        assert_eq!(RateTier::Rush.as_str(), "Rush");
    }
}
