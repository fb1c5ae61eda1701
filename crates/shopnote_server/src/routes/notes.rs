//! Note endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shopnote_core::{Note, NoteDraft, RepoError, ResourceRepository, SqliteNoteRepository};

use crate::error::ApiError;
use crate::routes::run_session;
use crate::AppState;

/// Envelope for single-note responses.
#[derive(Debug, Serialize)]
pub struct ResponseNote {
    pub note: Note,
}

/// Envelope for multi-note responses.
#[derive(Debug, Serialize)]
pub struct ResponseListNotes {
    pub notes: Vec<Note>,
}

#[derive(Debug, Deserialize)]
pub struct NoteTitleQuery {
    pub title: String,
}

/// POST /note — creates a note, echoing or defaulting its dates.
pub async fn create_note(
    State(state): State<AppState>,
    Json(draft): Json<NoteDraft>,
) -> Result<(StatusCode, Json<ResponseNote>), ApiError> {
    let created = run_session(state.store.clone(), move |conn| {
        SqliteNoteRepository::new(conn).create(&draft)
    })
    .await?;

    match created {
        Ok(note) => Ok((StatusCode::CREATED, Json(ResponseNote { note }))),
        Err(err) => Err(err.into()),
    }
}

/// GET /notes — lists every note; 404 when none exist.
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<ResponseListNotes>, ApiError> {
    let listed = run_session(state.store.clone(), |conn| {
        SqliteNoteRepository::new(conn).list_all()
    })
    .await?;

    match listed {
        Ok(notes) => Ok(Json(ResponseListNotes { notes })),
        Err(RepoError::NotFound { .. }) => {
            Err(ApiError::NotFound("No notes found".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /note?title= — returns every note with the exact title.
pub async fn find_note_by_title(
    State(state): State<AppState>,
    Query(query): Query<NoteTitleQuery>,
) -> Result<Json<ResponseListNotes>, ApiError> {
    let title = query.title;
    let found = run_session(state.store.clone(), {
        let title = title.clone();
        move |conn| SqliteNoteRepository::new(conn).find_by_key(&title)
    })
    .await?;

    match found {
        Ok(notes) => Ok(Json(ResponseListNotes { notes })),
        Err(RepoError::NotFound { .. }) => Err(ApiError::NotFound(format!(
            "No note found with title '{title}'"
        ))),
        Err(err) => Err(err.into()),
    }
}
