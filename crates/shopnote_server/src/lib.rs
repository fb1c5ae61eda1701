//! HTTP boundary for shopnote.
//!
//! Exposes the core query layer as JSON endpoints. Each request acquires
//! one scoped store session and performs a single query-layer call; there
//! is no cross-request state beyond the injected `Store` handle.

pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use shopnote_core::Store;

/// Shared handler state. Cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

/// Builds the full application router over the given store handle.
pub fn build_router(store: Store) -> Router {
    Router::new()
        .route(
            "/note",
            post(routes::notes::create_note).get(routes::notes::find_note_by_title),
        )
        .route("/notes", get(routes::notes::list_notes))
        .route(
            "/shopping-list",
            post(routes::shopping::create_shopping_list)
                .get(routes::shopping::find_shopping_list_by_name),
        )
        .route("/shopping-lists", get(routes::shopping::list_shopping_lists))
        .route("/health", get(routes::health))
        .with_state(AppState { store })
}
