//! Request handlers, one module per resource kind.

pub mod notes;
pub mod shopping;

use crate::error::ApiError;
use axum::Json;
use rusqlite::Connection;
use shopnote_core::{RepoResult, Store};

/// Runs one scoped store session on the blocking pool.
///
/// The inner `RepoResult` is handed back to the caller so each handler
/// keeps a visible branch for its own not-found message; only task
/// failures are absorbed here.
pub(crate) async fn run_session<T, F>(store: Store, f: F) -> Result<RepoResult<T>, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> RepoResult<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(move || store.with_session(f)).await {
        Ok(result) => Ok(result),
        Err(err) => {
            log::error!("event=session_task_failed module=server status=error error={err}");
            Err(ApiError::Internal)
        }
    }
}

/// Liveness probe reporting the core crate version.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": shopnote_core::core_version(),
    }))
}
