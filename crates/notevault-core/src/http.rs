//! Maps domain `AppError` to HTTP responses.
//!
//! Lives in `notevault-core` (behind the `axum` feature) because Rust's
//! orphan rule forbids implementing axum's `IntoResponse` for `AppError`
//! from another crate. Re-exported by `notevault_api::error`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Status code and machine-readable code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Database | ErrorKind::Storage => {
            (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
        }
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.kind);

        if status.is_server_error() {
            let source = self
                .source
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_default();
            tracing::error!(
                kind = %self.kind,
                error = %self.message,
                source = %source,
                "Request failed"
            );
        }

        let body = ApiErrorResponse {
            success: false,
            error: error_code.to_string(),
            message: self.message,
        };

        (status, Json(body)).into_response()
    }
}
