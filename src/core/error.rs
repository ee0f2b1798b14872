//! Typed error handling for the salon backend
//!
//! Three layers, each rendered as `{"error": "<message>"}` over HTTP:
//!
//! - [`ValidationError`]: input rejected before any write (400). The message
//!   strings are part of the API contract and must not drift.
//! - [`StoreError`]: persistence failures, including constraint violations
//!   surfaced by SQLite (404/400/409/500 depending on the variant).
//! - [`ApiError`]: the handler-facing type implementing [`IntoResponse`].
//!
//! Internal failures log their detail through `tracing` and return a stable
//! message to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Result alias used by all request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by the input validation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A create payload is missing (or carries an empty value for) a
    /// required field.
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone format")]
    InvalidPhone,

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    #[error("Invalid time format. Use HH:MM:SS")]
    InvalidTime,

    /// A field is present but carries the wrong JSON type, or a reference
    /// field does not parse as a UUID.
    #[error("Invalid {0} format")]
    InvalidField(String),

    /// A path segment that should be an entity ID does not parse as a UUID.
    #[error("Invalid entity ID format")]
    InvalidId,
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the given ID.
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: &'static str, id: Uuid },

    /// A foreign key in the written row points at a missing parent
    /// (FK violation on insert/update).
    #[error("{entity} references a missing record")]
    MissingReference { entity: &'static str },

    /// The appointment already has an invoice (unique violation on
    /// `invoices.appointment_id`).
    #[error("An invoice already exists for this appointment")]
    DuplicateInvoice,

    /// Restrict delete policy: dependent rows still reference this one
    /// (FK violation on delete).
    #[error("{entity} is still referenced by existing records")]
    InUse { entity: &'static str },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// API Errors
// =============================================================================

/// Handler-facing error mapped onto an HTTP status and a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    /// The caller sees a stable message; the detail goes to the log.
    #[error("Internal server error")]
    Internal { detail: String },
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::MissingReference { .. } => ApiError::BadRequest(err.to_string()),
            StoreError::DuplicateInvoice | StoreError::InUse { .. } => {
                ApiError::Conflict(err.to_string())
            }
            StoreError::Database(e) => ApiError::Internal {
                detail: e.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail } = &self {
            tracing::error!(%detail, "request failed");
        }
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
