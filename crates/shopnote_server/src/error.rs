//! Client-facing error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shopnote_core::RepoError;

/// Error body shape: a single human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Boundary error with a fixed HTTP status per variant.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with a resource-specific message.
    NotFound(String),
    /// 409 for store-level uniqueness violations.
    Conflict(String),
    /// 500 with a generic detail; the cause is logged, not exposed.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            Self::Conflict(detail) => (StatusCode::CONFLICT, detail),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Fallback mapping for query-layer errors a handler did not branch on.
/// Handlers intercept `NotFound` themselves when the message needs the
/// requested key; the generic message here covers the listing routes.
impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { resource } => Self::NotFound(format!("No {resource} found")),
            RepoError::Constraint(message) => {
                Self::Conflict(format!("constraint violation: {message}"))
            }
            other => {
                log::error!("event=query_failed module=server status=error error={other}");
                Self::Internal
            }
        }
    }
}
