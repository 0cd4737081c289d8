pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Uniform error envelope returned by every failing endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "code": "VALIDATION_FAILED",
///   "message": "Request validation failed",
///   "details": "title must be 1..100 chars"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable summary
    pub message: String,
    /// Plain-text detail about this occurrence
    pub details: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this type; the mapping
/// to status code and envelope happens only here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {message}: {details}")]
    Validation { message: String, details: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure with the default summary message.
    pub fn validation(details: impl Into<String>) -> Self {
        AppError::Validation {
            message: ErrorCode::ValidationFailed.default_message().to_string(),
            details: details.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidJson(_) => ErrorCode::ValidationFailed,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        let (message, details) = match self {
            AppError::Validation { message, details } => {
                tracing::info!(error_code = %code, "Validation failed: {}", details);
                (message, details)
            }
            AppError::InvalidJson(details) => {
                tracing::info!(error_code = %code, "Invalid JSON body: {}", details);
                ("Invalid JSON format".to_string(), details)
            }
            AppError::NotFound(details) => {
                tracing::info!(error_code = %code, "Not found: {}", details);
                (code.default_message().to_string(), details)
            }
            AppError::Internal(details) => {
                tracing::error!(error_code = %code, "Internal server error: {}", details);
                (code.default_message().to_string(), details)
            }
        };

        let body = Json(ErrorResponse {
            code,
            message,
            details,
        });

        (code.status(), body).into_response()
    }
}
