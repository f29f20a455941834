use axum::{http::StatusCode, Json};
use serde_json::json;
use validator::ValidationErrors;

pub const VALIDATION_ERRORS: &str = "validation errors";

/// Error body shared by write endpoints: `{"errors": [message]}`.
pub fn errors_response(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "errors": [message] })))
}

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    tracing::warn!("Failed to validate payload: {errors}");
    errors_response(StatusCode::BAD_REQUEST, VALIDATION_ERRORS)
}
