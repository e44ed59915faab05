//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`; the [`IntoResponse`] impl turns
//! the variant into a status code and a JSON body of the form
//!
//! ```json
//! { "error": "Path not found", "code": "not_found", "details": { "target": "..." } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Serialized error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input failed validation (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Request input could not be used as an argument at all, e.g. a negative
    /// delay or a path with a NUL byte (400).
    #[error("{message}")]
    InvalidArgument { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The operation was cancelled before it could complete (503).
    #[error("{message}")]
    Cancelled { message: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_argument(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::InvalidArgument { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Cancelled { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable body.
    pub fn to_error_body(&self) -> ErrorBody {
        let (code, details) = match self {
            AppError::Validation { details, .. } => ("validation_error", details.clone()),
            AppError::InvalidArgument { details, .. } => ("invalid_argument", details.clone()),
            AppError::NotFound { details, .. } => ("not_found", details.clone()),
            AppError::Cancelled { .. } => ("cancelled", Value::Null),
            AppError::Internal { details, .. } => ("internal_error", details.clone()),
        };

        ErrorBody {
            error: self.to_string(),
            code,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Request failed");
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!({ "fields": errors }))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal("I/O error", json!({ "reason": e.to_string() }))
    }
}
