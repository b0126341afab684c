//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use telelink_ops::{DispatchError, OpError};

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// A failed operation; status depends on the failure kind
    Dispatch(DispatchError),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
}

/// HTTP status and error code for an operation failure
fn classify(error: &OpError) -> (StatusCode, &'static str) {
    match error {
        OpError::Configuration(_) => (StatusCode::BAD_REQUEST, "configuration_error"),
        OpError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        OpError::UnknownOperation { .. } => (StatusCode::BAD_REQUEST, "unknown_operation"),
        OpError::NoVehicles => (StatusCode::NOT_FOUND, "no_vehicles"),
        OpError::VehicleNotFound { .. } => (StatusCode::NOT_FOUND, "vehicle_not_found"),
        OpError::IndexOutOfBounds { .. } => (StatusCode::NOT_FOUND, "index_out_of_bounds"),
        OpError::Authentication(_) => (StatusCode::UNAUTHORIZED, "authentication_failed"),
        OpError::RemoteCapability {
            unsupported: true, ..
        } => (StatusCode::NOT_IMPLEMENTED, "capability_not_supported"),
        OpError::RemoteCapability { .. } => (StatusCode::BAD_GATEWAY, "remote_error"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, operation) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Dispatch(err) => {
                let (status, error_type) = classify(&err.error);
                (status, error_type, err.error.to_string(), Some(err.operation))
            }
        };

        // Log errors at appropriate levels
        if status.is_server_error() {
            tracing::warn!(error = error_type, ?operation, %message, "Operation failed remotely");
        } else if status.is_client_error() {
            tracing::debug!(error = error_type, ?operation, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            operation,
        });

        (status, body).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        ApiError::Dispatch(err)
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
