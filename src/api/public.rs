//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
}

// Errors

/// Errors returned by handlers. Only the status code and a generic
/// message reach the caller, details are logged.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input the caller can fix
    Validation(&'static str),
    /// The completion provider was unreachable or sent back something
    /// unusable
    Upstream(anyhow::Error),
    /// The store could not be read or written
    Persistence(&'static str, anyhow::Error),
    Internal(anyhow::Error),
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Upstream(err) => {
                tracing::error!("Completion request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "AI request failed")
            }
            ApiError::Persistence(msg, err) => {
                tracing::error!("{}: {:#}", msg, err);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(err) => {
                tracing::error!("{:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}
