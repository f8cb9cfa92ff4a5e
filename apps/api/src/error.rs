//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  handler                                                                │
//! │    │                                                                    │
//! │    ├── input fails validation ──► ApiError::validation("Cantidad       │
//! │    │                              inválida") ──► 400                    │
//! │    │                                                                    │
//! │    └── storage call fails ──────► ApiError::storage("Error al guardar  │
//! │                                   producción", err) ──► 500             │
//! │                                                                         │
//! │  Response body either way: {"error": "<mensaje>"}                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found on update/delete is deliberately collapsed into the storage
//! path: the client contract distinguishes only "bad request" from "it
//! didn't work". The underlying typed error is logged with structure and
//! goes no further.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use masa_db::DbError;

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable category (drives the status code)
    pub code: ErrorCode,

    /// Localized, user-facing message
    pub message: String,
}

/// Error categories for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Persistence layer failed, not-found included (500)
    StorageError,
}

impl ApiError {
    /// Creates a validation error with a localized message.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates a storage error with a localized message, logging the
    /// underlying database error.
    pub fn storage(message: impl Into<String>, source: DbError) -> Self {
        tracing::error!(error = %source, "Storage operation failed");
        ApiError {
            code: ErrorCode::StorageError,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
