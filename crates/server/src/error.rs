//! Application error types.
//!
//! The only failure that routinely surfaces to a client is a missing
//! page-defining entity (404). Store failures are logged and, except
//! for page-defining lookups, degrade to empty results long before
//! reaching this layer; `Internal` is the catch-all for anything that
//! still escapes a handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Keep internal detail out of responses; log it instead.
        let (status, body) = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found"),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
