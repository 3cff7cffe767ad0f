//! Error handling module
//!
//! Defines error types and handling logic used in the project

use crate::models::{ErrorResponse, MISSING_IDEA_MESSAGE};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Upstream completion call failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Request body over the configured size limit
    #[error("{0}")]
    PayloadTooLarge(String),
}

/// Failures of the outbound chat completion call.
///
/// Every variant maps to the same HTTP status; the distinction exists for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// No credential configured
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,

    /// Connection, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status from the upstream API
    #[error("Error code: {status} - {message}")]
    Status { status: u16, message: String },

    /// Upstream body could not be decoded
    #[error("Failed to parse upstream response: {0}")]
    Decode(String),

    /// Upstream returned no usable choice
    #[error("Upstream response contained no choices")]
    EmptyChoices,
}

impl AppError {
    /// Validation error for a body without a readable `idea`
    pub fn missing_idea() -> Self {
        AppError::Validation(MISSING_IDEA_MESSAGE.to_string())
    }

    /// Error for a body larger than `limit` bytes
    pub fn payload_too_large(limit: usize) -> Self {
        AppError::PayloadTooLarge(format!("Request body exceeds {} bytes", limit))
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Get machine-readable error kind
    pub fn error_kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Upstream(_) => "upstream_error",
            AppError::NotFound(_) => "not_found",
            AppError::PayloadTooLarge(_) => "payload_too_large",
        }
    }

    /// Convert to the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            kind: self.error_kind().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Upstream(err) => {
                tracing::error!("Upstream error: {:?} - Status code: {}", err, status);
            }
            _ => {
                tracing::warn!("Client error: {} - Status code: {}", self, status);
            }
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
