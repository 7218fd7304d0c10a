//! Tariff REST API handlers

use axum::{extract::State, Json};

use super::dto::{ChargeBreakdownResponse, CostPreviewRequest, RatesResponse};
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/tariffs/preview-cost",
    tag = "Tariffs",
    request_body = CostPreviewRequest,
    responses(
        (status = 200, description = "Charge for the stay", body = ApiResponse<ChargeBreakdownResponse>),
        (status = 400, description = "Departure before arrival")
    )
)]
pub async fn preview_cost(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CostPreviewRequest>,
) -> ApiResult<ChargeBreakdownResponse> {
    let breakdown = state
        .parking
        .calculate_charge(req.arrival, req.departure, req.vehicle_type)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(breakdown.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/tariffs/rates",
    tag = "Tariffs",
    responses(
        (status = 200, description = "Hourly rates", body = ApiResponse<RatesResponse>)
    )
)]
pub async fn get_rates(State(state): State<AppState>) -> ApiResult<RatesResponse> {
    Ok(Json(ApiResponse::success(state.parking.rates().await.into())))
}
