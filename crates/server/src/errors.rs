use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{FieldError, ServiceError};
use tracing::error;

/// Error reply in the API's wire shape.
///
/// Validation and conflict failures carry a structured per-field list
/// serialized as `{"errors": [{"field": ..., "msg": ...}]}`; a missing
/// record renders the plain-text not-found line.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    NotFound,
    Conflict(i64),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, msg)])
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errors) => Self::Validation(errors),
            ServiceError::NotFound(_) => Self::NotFound,
            ServiceError::Conflict(id) => Self::Conflict(id),
            ServiceError::Dataset(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, "Food truck not found").into_response()
            }
            ApiError::Conflict(id) => {
                let errors = vec![FieldError::new(
                    "locationid",
                    format!("Food truck with locationid {id} already exists"),
                )];
                (StatusCode::CONFLICT, Json(serde_json::json!({ "errors": errors })))
                    .into_response()
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": msg })),
                )
                    .into_response()
            }
        }
    }
}
