//! Holiday calendar

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::HolidayRecord;
use crate::interfaces::http::common::{ApiResponse, ApiResult};
use crate::interfaces::http::state::AppState;
use crate::support::time::{format_date, CLOCK_TIME};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HolidayResponse {
    pub date: NaiveDate,
    /// `dd-mm-YYYY`
    pub date_display: String,
    pub name: String,
    /// `HH:MM`
    pub rush_from: String,
    pub rush_to: String,
    /// Every non-night hour of the date bills at the rush rate
    pub full_day: bool,
}

impl From<HolidayRecord> for HolidayResponse {
    fn from(h: HolidayRecord) -> Self {
        Self {
            date: h.date,
            date_display: format_date(h.date),
            name: h.name,
            rush_from: h.rush.from.format(CLOCK_TIME).to_string(),
            rush_to: h.rush.to.format(CLOCK_TIME).to_string(),
            full_day: h.rush.is_full_day(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/holidays",
    tag = "Holidays",
    responses(
        (status = 200, description = "Holidays in date order", body = ApiResponse<Vec<HolidayResponse>>)
    )
)]
pub async fn list_holidays(State(state): State<AppState>) -> ApiResult<Vec<HolidayResponse>> {
    let holidays = state
        .parking
        .holidays()
        .await
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ApiResponse::success(holidays)))
}
