//! Report and search handlers

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{ReportResponse, SearchParams};
use crate::interfaces::http::common::{ApiResponse, ApiResult};
use crate::interfaces::http::modules::slots::dto::SlotResponse;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/reports/summary",
    tag = "Reports",
    responses(
        (status = 200, description = "Occupancy and revenue summary", body = ApiResponse<ReportResponse>)
    )
)]
pub async fn summary(State(state): State<AppState>) -> ApiResult<ReportResponse> {
    Ok(Json(ApiResponse::success(state.parking.report().await.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/search",
    tag = "Reports",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching slots", body = ApiResponse<Vec<SlotResponse>>)
    )
)]
pub async fn search_vehicles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<SlotResponse>> {
    let rates = state.parking.rates().await;
    let hits = state
        .parking
        .search(&params.q)
        .await
        .iter()
        .map(|s| SlotResponse::from_slot(s, &rates))
        .collect();
    Ok(Json(ApiResponse::success(hits)))
}
