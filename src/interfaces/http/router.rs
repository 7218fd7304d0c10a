//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::{
    health, holidays, metrics, reports, request_id::request_id_middleware, reservations, slots,
    tariffs,
};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Slots
        slots::list_slots,
        slots::get_slot,
        slots::park_vehicle,
        slots::depart_vehicle,
        // Reservations
        reservations::create_reservation,
        reservations::convert_reservation,
        reservations::cancel_reservation,
        // Tariffs
        tariffs::preview_cost,
        tariffs::get_rates,
        // Holidays
        holidays::list_holidays,
        // Reports
        reports::summary,
        reports::search_vehicles,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            slots::dto::SlotResponse,
            slots::dto::ParkedVehicleResponse,
            slots::dto::ReservationInfoResponse,
            slots::dto::ArrivalRequest,
            slots::dto::DepartureRequest,
            slots::dto::ParkingBillResponse,
            reservations::dto::CreateReservationRequest,
            tariffs::dto::CostPreviewRequest,
            tariffs::dto::ChargeBreakdownResponse,
            tariffs::dto::HourSliceResponse,
            tariffs::dto::RatesResponse,
            tariffs::dto::VehicleRateResponse,
            holidays::HolidayResponse,
            reports::dto::ReportResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Slots", description = "Slot occupancy: arrivals, departures and billing"),
        (name = "Reservations", description = "Advance bookings and their conversion on arrival"),
        (name = "Tariffs", description = "Hourly rates and charge preview"),
        (name = "Holidays", description = "Holiday calendar with custom rush windows"),
        (name = "Reports", description = "Occupancy and revenue summary, vehicle search"),
    ),
    info(
        title = "Texnouz Parking API",
        version = "1.0.0",
        description = "REST API for slot allocation and parking charges",
        license(name = "MIT"),
        contact(name = "Texnouz", email = "support@texnouz.com")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        // Slots
        .route("/api/v1/slots", get(slots::list_slots))
        .route("/api/v1/slots/arrivals", post(slots::park_vehicle))
        .route("/api/v1/slots/{slot}", get(slots::get_slot))
        .route("/api/v1/slots/{slot}/departure", post(slots::depart_vehicle))
        // Reservations
        .route("/api/v1/reservations", post(reservations::create_reservation))
        .route("/api/v1/reservations/{slot}", delete(reservations::cancel_reservation))
        .route(
            "/api/v1/reservations/{slot}/convert",
            post(reservations::convert_reservation),
        )
        // Tariffs
        .route("/api/v1/tariffs/preview-cost", post(tariffs::preview_cost))
        .route("/api/v1/tariffs/rates", get(tariffs::get_rates))
        // Holidays
        .route("/api/v1/holidays", get(holidays::list_holidays))
        // Reports
        .route("/api/v1/reports/summary", get(reports::summary))
        .route("/api/v1/vehicles/search", get(reports::search_vehicles))
        .with_state(state);

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(swagger_routes)
        .merge(api_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────
