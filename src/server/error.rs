//! API error taxonomy and JSON error responses.
//!
//! Every error surfaced to a client becomes `{"error": <message>}` with an
//! appropriate status; no store-level failure propagates raw.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid request fields.
    #[error("{0}")]
    Validation(String),
    /// Credential mismatch on login.
    #[error("{0}")]
    Unauthorized(String),
    /// No matching rows for a lookup.
    #[error("{0}")]
    NotFound(String),
    /// Duplicate unique key on creation.
    #[error("{0}")]
    Conflict(String),
    /// Constraint violation or other failure surfaced by the store.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Anything else that escapes the storage layer.
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
