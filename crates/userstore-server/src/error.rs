//! Mapping of store errors onto HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use userstore_core::Error;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

/// Failure of a request handler.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be bound to the expected payload.
    InvalidRequest(String),
    /// The store rejected or failed the operation.
    Store(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, text, message) = match self {
            ApiError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, "Invalid request.", message)
            }
            ApiError::Store(Error::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                "Resource not found.",
                "user_not_found".to_string(),
            ),
            ApiError::Store(err @ Error::Load(_)) => {
                error!(error = %err, "Failed to load users");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.",
                    "load_failed".to_string(),
                )
            }
            ApiError::Store(err @ Error::Allocation(_)) => {
                error!(error = %err, "Failed to allocate user id");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.",
                    "allocation_failed".to_string(),
                )
            }
            ApiError::Store(err @ Error::PersistenceFailed(_)) => {
                error!(error = %err, "Failed to persist users");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.",
                    "persistence_failed".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            status: text,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}
