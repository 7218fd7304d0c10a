//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value.
//! On validation failure it returns an automatic 422 response with
//! structured field-level error details.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, OptionalFromRequest};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

/// An extractor that deserializes JSON and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Arrival {
///     #[validate(length(min = 1, max = 20))]
///     vehicle_number: String,
/// }
///
/// async fn park(ValidatedJson(body): ValidatedJson<Arrival>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let mut field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let msg = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{:?}", e.code));
                            // struct-level rules are keyed `__all__`
                            if *field == "__all__" {
                                msg
                            } else {
                                format!("{}: {}", field, msg)
                            }
                        })
                    })
                    .collect();
                field_errors.sort();

                let message = if field_errors.is_empty() {
                    "Validation failed".to_string()
                } else {
                    field_errors.join("; ")
                };

                let body = ApiResponse::<()>::error(message);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

/// `Option<ValidatedJson<T>>` is `None` when the request has no
/// `Content-Type` header; a body that is present is still parsed and
/// validated.
impl<S, T> OptionalFromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let Some(Json(value)) = <Json<T> as OptionalFromRequest<S>>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?
        else {
            return Ok(None);
        };

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(Some(ValidatedJson(value)))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct PlateBody {
        #[validate(length(min = 1, max = 20, message = "plate must be 1-20 characters"))]
        vehicle_number: String,
        #[validate(range(min = 1, max = 720))]
        duration_hours: u32,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<PlateBody>) -> String {
        body.vehicle_number
    }

    async fn optional_handler(body: Option<ValidatedJson<PlateBody>>) -> String {
        match body {
            Some(ValidatedJson(body)) => body.vehicle_number,
            None => "none".to_string(),
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/plates", post(handler))
            .route("/optional", post(optional_handler))
    }

    async fn send(body: Body) -> axum::http::Response<Body> {
        use tower::Service;
        let req = Request::builder()
            .method("POST")
            .uri("/plates")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    fn json(value: serde_json::Value) -> Body {
        Body::from(serde_json::to_vec(&value).unwrap())
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let resp = send(json(serde_json::json!({
            "vehicle_number": "KA01AB1234",
            "duration_hours": 3
        })))
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400() {
        let resp = send(Body::from("not json")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn validation_failure_returns_422_with_field_messages() {
        let resp = send(json(serde_json::json!({
            "vehicle_number": "",
            "duration_hours": 0
        })))
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse<()> = serde_json::from_slice(&bytes).unwrap();
        let error = body.error.unwrap();
        assert!(error.contains("vehicle_number: plate must be 1-20 characters"));
        assert!(error.contains("duration_hours"));
    }

    #[tokio::test]
    async fn optional_body_may_be_omitted() {
        use tower::Service;

        let mut svc = app().into_service();
        let req = Request::builder()
            .method("POST")
            .uri("/optional")
            .body(Body::empty())
            .unwrap();
        let resp = svc.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"none");

        let req = Request::builder()
            .method("POST")
            .uri("/optional")
            .header("content-type", "application/json")
            .body(json(serde_json::json!({
                "vehicle_number": "",
                "duration_hours": 3
            })))
            .unwrap();
        let resp = svc.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
