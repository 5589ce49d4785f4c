//! Builds the response envelope every endpoint answers with.
//! Success and failure share one body shape: status marker, message,
//! optional data, and the UTC time the response was produced.

use axum::Json;
use chrono::Utc;
use http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Outcome marker for the envelope.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The `{status, message, data, timestamp}` body shared by every response.
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    status: ResponseStatus,
    message: String,
    data: Option<Value>,
    timestamp: String,
}

/// Builds a standardized response body stamped with the current UTC time.
fn make_response(
    status: ResponseStatus,
    message: &str,
    data: Option<Value>,
    code: StatusCode,
) -> (StatusCode, Json<ApiResponse>) {
    (
        code,
        Json(ApiResponse {
            status,
            message: message.to_string(),
            data,
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}

/// Success with a payload, for 200/201 answers.
pub fn success_response(
    message: &str,
    data: Value,
    code: StatusCode,
) -> (StatusCode, Json<ApiResponse>) {
    make_response(ResponseStatus::Success, message, Some(data), code)
}

/// Rejected input; `data` stays null.
pub fn bad_request_response(message: &str) -> (StatusCode, Json<ApiResponse>) {
    make_response(ResponseStatus::Error, message, None, StatusCode::BAD_REQUEST)
}

/// Lookup miss; `data` stays null.
pub fn not_found_response(message: &str) -> (StatusCode, Json<ApiResponse>) {
    make_response(ResponseStatus::Error, message, None, StatusCode::NOT_FOUND)
}

/// Server-side fault; `data` stays null.
pub fn internal_error_response(message: &str) -> (StatusCode, Json<ApiResponse>) {
    make_response(
        ResponseStatus::Error,
        message,
        None,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
