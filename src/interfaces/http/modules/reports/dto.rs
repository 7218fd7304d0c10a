//! Report DTOs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::FacilityReport;
use crate::domain::VehicleType;
use crate::support::time::format_money;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportResponse {
    pub total_slots: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    /// Percent of slots holding a parked vehicle
    pub occupancy_rate: f64,
    /// Charges left on slots by their last departure, minor units
    pub revenue: i64,
    pub revenue_display: String,
    pub average_revenue_per_slot: f64,
    pub vehicles_by_type: BTreeMap<String, usize>,
    pub reservations_by_type: BTreeMap<String, usize>,
}

fn by_name(counts: BTreeMap<VehicleType, usize>) -> BTreeMap<String, usize> {
    counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

impl From<FacilityReport> for ReportResponse {
    fn from(r: FacilityReport) -> Self {
        Self {
            total_slots: r.stats.total,
            available: r.stats.available,
            occupied: r.stats.occupied,
            reserved: r.stats.reserved,
            occupancy_rate: r.stats.occupancy_rate,
            revenue: r.stats.revenue,
            revenue_display: format_money(r.stats.revenue, &r.currency),
            average_revenue_per_slot: r.average_revenue_per_slot,
            vehicles_by_type: by_name(r.vehicles_by_type),
            reservations_by_type: by_name(r.reservations_by_type),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Slot number, or part of a plate
    pub q: String,
}
