//! Slot REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ArrivalRequest, DepartureRequest, ParkingBillResponse, SlotResponse};
use crate::application::services::allocation;
use crate::interfaces::http::common::validation::validate_stay;
use crate::interfaces::http::common::{
    domain_error, rule_violation, ApiError, ApiResponse, ApiResult, ValidatedJson,
};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/slots",
    tag = "Slots",
    responses(
        (status = 200, description = "Every slot in number order", body = ApiResponse<Vec<SlotResponse>>)
    )
)]
pub async fn list_slots(State(state): State<AppState>) -> ApiResult<Vec<SlotResponse>> {
    let rates = state.parking.rates().await;
    let slots = state
        .parking
        .list_slots()
        .await
        .iter()
        .map(|s| SlotResponse::from_slot(s, &rates))
        .collect();
    Ok(Json(ApiResponse::success(slots)))
}

#[utoipa::path(
    get,
    path = "/api/v1/slots/{slot}",
    tag = "Slots",
    params(("slot" = u32, Path, description = "Slot number")),
    responses(
        (status = 200, description = "Slot details", body = ApiResponse<SlotResponse>),
        (status = 404, description = "No such slot")
    )
)]
pub async fn get_slot(
    State(state): State<AppState>,
    Path(slot): Path<u32>,
) -> ApiResult<SlotResponse> {
    let rates = state.parking.rates().await;
    let found = state.parking.get_slot(slot).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(SlotResponse::from_slot(
        &found, &rates,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/v1/slots/arrivals",
    tag = "Slots",
    request_body = ArrivalRequest,
    responses(
        (status = 201, description = "Vehicle parked", body = ApiResponse<SlotResponse>),
        (status = 409, description = "Plate already parked or facility full"),
        (status = 422, description = "Invalid plate or stay window")
    )
)]
pub async fn park_vehicle(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ArrivalRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SlotResponse>>), ApiError> {
    let arrival = match req.arrival {
        Some(arrival) => arrival,
        None => {
            let now = state.parking.now();
            validate_stay(now, req.expected_pickup)
                .map_err(|e| rule_violation("expected_pickup", e))?;
            now
        }
    };
    let request = allocation::ArrivalRequest {
        vehicle_type: req.vehicle_type,
        vehicle_number: req.vehicle_number,
        arrival,
        expected_pickup: req.expected_pickup,
    };

    let parked = state
        .parking
        .place_arrival(request)
        .await
        .map_err(domain_error)?;

    let rates = state.parking.rates().await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SlotResponse::from_slot(&parked, &rates))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/slots/{slot}/departure",
    tag = "Slots",
    params(("slot" = u32, Path, description = "Slot number")),
    request_body(content = DepartureRequest, description = "Optional; without a body the departure is now"),
    responses(
        (status = 200, description = "Vehicle billed and slot freed", body = ApiResponse<ParkingBillResponse>),
        (status = 400, description = "Departure before arrival"),
        (status = 404, description = "No such slot"),
        (status = 409, description = "Slot holds no vehicle")
    )
)]
pub async fn depart_vehicle(
    State(state): State<AppState>,
    Path(slot): Path<u32>,
    body: Option<ValidatedJson<DepartureRequest>>,
) -> ApiResult<ParkingBillResponse> {
    let departure = body
        .and_then(|ValidatedJson(req)| req.departure)
        .unwrap_or_else(|| state.parking.now());
    let bill = state
        .parking
        .remove_and_bill(slot, departure)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(bill.into())))
}
