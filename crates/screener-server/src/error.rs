use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use screener_core::validation::{IntakeRejection, REQUIRED_FIELDS, example_intake};
use screener_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Intake failed caller-side validation; answered with the field list.
    Intake(IntakeRejection),
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Intake(rejection) => return intake_response(rejection),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn intake_response(rejection: IntakeRejection) -> Response {
    let body = match &rejection {
        IntakeRejection::NotAnObject => json!({
            "error": "Invalid request body",
            "message": sentence(&rejection.to_string()),
            "required_fields": REQUIRED_FIELDS,
        }),
        IntakeRejection::MissingFields(missing) => json!({
            "error": "Missing required fields",
            "message": sentence(&rejection.to_string()),
            "missing_fields": missing,
            "required_fields": REQUIRED_FIELDS,
            "example": example_intake(),
        }),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Capitalize the first letter of an error message for display.
fn sentence(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<screener_export::error::ExportError> for ApiError {
    fn from(e: screener_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<screener_core::error::CoreError> for ApiError {
    fn from(e: screener_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
