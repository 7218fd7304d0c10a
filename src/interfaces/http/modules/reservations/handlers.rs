//! Reservation HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::CreateReservationRequest;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson,
};
use crate::interfaces::http::modules::slots::dto::SlotResponse;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Slot reserved", body = ApiResponse<SlotResponse>),
        (status = 409, description = "Plate already known or facility full"),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SlotResponse>>), ApiError> {
    let reserved = state
        .parking
        .place_reservation(req.into())
        .await
        .map_err(domain_error)?;

    let rates = state.parking.rates().await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SlotResponse::from_slot(
            &reserved, &rates,
        ))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{slot}/convert",
    tag = "Reservations",
    params(("slot" = u32, Path, description = "Reserved slot number")),
    responses(
        (status = 200, description = "Reservation turned into a parked vehicle", body = ApiResponse<SlotResponse>),
        (status = 404, description = "No such slot"),
        (status = 409, description = "Slot is not reserved")
    )
)]
pub async fn convert_reservation(
    State(state): State<AppState>,
    Path(slot): Path<u32>,
) -> ApiResult<SlotResponse> {
    let occupied = state.parking.convert(slot).await.map_err(domain_error)?;

    let rates = state.parking.rates().await;
    Ok(Json(ApiResponse::success(SlotResponse::from_slot(
        &occupied, &rates,
    ))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{slot}",
    tag = "Reservations",
    params(("slot" = u32, Path, description = "Reserved slot number")),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<SlotResponse>),
        (status = 404, description = "No such slot"),
        (status = 409, description = "Slot is not reserved")
    )
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(slot): Path<u32>,
) -> ApiResult<SlotResponse> {
    let freed = state.parking.cancel(slot).await.map_err(domain_error)?;

    let rates = state.parking.rates().await;
    Ok(Json(ApiResponse::success(SlotResponse::from_slot(
        &freed, &rates,
    ))))
}
