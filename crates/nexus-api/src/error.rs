//! HTTP error mapping for the API shell.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// API-level error with an HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
    /// Unexpected internal failure (e.g. vault persistence).
    Internal(nexus_core::Error),
    /// Resource does not exist.
    NotFound(String),
    /// Rejected at the validation boundary.
    BadRequest(String),
    /// The external AI collaborator failed (transport, auth, quota, or
    /// unusable output).
    BadGateway(String),
}

impl From<nexus_core::Error> for ApiError {
    fn from(err: nexus_core::Error) -> Self {
        match err {
            nexus_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            nexus_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            nexus_core::Error::NotConfigured(msg) => {
                ApiError::BadRequest(format!("AI backend not configured: {}", msg))
            }
            nexus_core::Error::Request(msg) | nexus_core::Error::Inference(msg) => {
                ApiError::BadGateway(msg)
            }
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
