//! Tariff DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ChargeBreakdown, HourSlice, RateTable, VehicleType};
use crate::support::time::format_money;

/// One billed hour and the tier it was charged at
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HourSliceResponse {
    pub starts_at: NaiveDateTime,
    /// `Standard`, `Rush` or `Night`
    pub tier: String,
}

impl From<HourSlice> for HourSliceResponse {
    fn from(h: HourSlice) -> Self {
        Self {
            starts_at: h.starts_at,
            tier: h.tier.to_string(),
        }
    }
}

/// Itemized charge. Amounts are in minor currency units.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChargeBreakdownResponse {
    pub vehicle_type: String,
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
    /// e.g. `450.00 INR`
    pub total_display: String,
    pub hours: Vec<HourSliceResponse>,
}

impl From<ChargeBreakdown> for ChargeBreakdownResponse {
    fn from(b: ChargeBreakdown) -> Self {
        let total_display = b.format_total();
        Self {
            vehicle_type: b.vehicle_type.to_string(),
            total_hours: b.total_hours,
            standard_hours: b.standard_hours,
            rush_hours: b.rush_hours,
            night_hours: b.night_hours,
            standard_rate: b.standard_rate,
            rush_rate: b.rush_rate,
            night_rate: b.night_rate,
            standard_charge: b.standard_charge,
            rush_charge: b.rush_charge,
            night_charge: b.night_charge,
            total: b.total,
            currency: b.currency,
            total_display,
            hours: b.hours.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CostPreviewRequest {
    #[schema(value_type = String, example = "Bike")]
    pub vehicle_type: VehicleType,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleRateResponse {
    pub vehicle_type: String,
    pub standard: i64,
    pub rush: i64,
    pub rush_surcharge: i64,
    pub standard_display: String,
    pub rush_display: String,
}

/// Hourly price list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RatesResponse {
    pub currency: String,
    pub night_rate: i64,
    pub night_display: String,
    pub vehicles: Vec<VehicleRateResponse>,
}

impl From<RateTable> for RatesResponse {
    fn from(table: RateTable) -> Self {
        let vehicles = VehicleType::ALL
            .iter()
            .map(|t| {
                let rate = table.for_vehicle(*t);
                VehicleRateResponse {
                    vehicle_type: t.to_string(),
                    standard: rate.standard,
                    rush: rate.rush(),
                    rush_surcharge: rate.rush_surcharge,
                    standard_display: format_money(rate.standard, &table.currency),
                    rush_display: format_money(rate.rush(), &table.currency),
                }
            })
            .collect();

        Self {
            night_display: format_money(table.night_rate, &table.currency),
            night_rate: table.night_rate,
            currency: table.currency,
            vehicles,
        }
    }
}
