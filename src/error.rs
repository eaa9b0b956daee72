//! HTTP-facing error type.
//!
//! Every failure a handler can produce is converted into a JSON body of the form
//!
//! ```json
//! { "error": { "code": "missing_parameter", "message": "...", "details": {} } }
//! ```
//!
//! CORS headers are attached by [`crate::api::middleware::cors`], so error
//! responses carry them as well.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::infrastructure::places::ProviderError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Caller input is absent or malformed. No cache or provider call was made.
    MissingParameter { message: String, details: Value },
    /// The places provider failed or returned something unusable. Nothing was cached.
    Upstream { message: String, details: Value },
}

impl AppError {
    pub fn missing_parameter(message: impl Into<String>, details: Value) -> Self {
        Self::MissingParameter {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingParameter { message, .. } => write!(f, "missing parameter: {message}"),
            AppError::Upstream { message, .. } => write!(f, "upstream error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        let details = match &e {
            ProviderError::Status(status) => json!({ "status": status }),
            ProviderError::Rejected(status) => json!({ "provider_status": status }),
            _ => json!({}),
        };
        AppError::upstream(e.to_string(), details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::MissingParameter { message, details } => {
                ("missing_parameter", message, details)
            }
            AppError::Upstream { message, details } => ("upstream_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
