//! Note wire/stored shapes and their mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Wire-facing input for note creation.
///
/// Dates default to the moment of deserialization when the client omits
/// them, matching the server-assigned-timestamp contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteDraft {
    /// Title of the note. Not unique; lookups by title may match many.
    pub title: String,
    /// Free-form body text. May be empty.
    pub content: String,
    #[serde(default = "now_utc")]
    pub create_date: DateTime<Utc>,
    #[serde(default = "now_utc")]
    pub modified_date: DateTime<Utc>,
}

/// Wire-facing note returned to clients. Identity and dates are always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub create_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// Stored representation of one `notes` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub create_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl NoteRow {
    /// Maps a wire draft to a stored row, assigning a fresh identity.
    pub fn from_draft(draft: &NoteDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            create_date: draft.create_date,
            modified_date: draft.modified_date,
        }
    }

    /// Maps a stored row to its wire-facing shape.
    pub fn into_wire(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            create_date: self.create_date,
            modified_date: self.modified_date,
        }
    }
}

pub(crate) fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
