//! Shared HTTP building blocks: response envelope, error mapping and the
//! validating JSON extractor.

pub mod validated_json;
pub mod validation;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

use crate::domain::DomainError;

pub use validated_json::ValidatedJson;

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// HTTP status for a rejected domain operation
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::DuplicatePlate { .. }
        | DomainError::NoCapacity { .. }
        | DomainError::NotReserved { .. }
        | DomainError::SlotEmpty { .. } => StatusCode::CONFLICT,
        DomainError::InvalidInterval { .. } | DomainError::InvalidSnapshot(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::SlotNotFound { .. } => StatusCode::NOT_FOUND,
    }
}

impl From<DomainError> for ApiResponse<()> {
    fn from(err: DomainError) -> Self {
        ApiResponse::error(err.to_string())
    }
}

pub fn domain_error(err: DomainError) -> ApiError {
    (status_for(&err), Json(err.into()))
}

/// 422 for a rule that could only be checked inside the handler
pub fn rule_violation(field: &str, err: ValidationError) -> ApiError {
    let message = err
        .message
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string());
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(format!("{}: {}", field, message))),
    )
}
