//! Note repository: SQLite implementation of the resource contract.
//!
//! # Responsibility
//! - Persist and query `notes` rows.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Created notes are read back from the store so the returned record
//!   reflects exactly what was persisted.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::note::{Note, NoteDraft, NoteRow};
use crate::repo::{RepoError, RepoResult, ResourceRepository};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    create_date,
    modified_date
FROM notes";

/// SQLite-backed note repository over a borrowed session connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ResourceRepository for SqliteNoteRepository<'_> {
    type Draft = NoteDraft;
    type Record = Note;

    fn create(&self, draft: &NoteDraft) -> RepoResult<Note> {
        let row = NoteRow::from_draft(draft);

        self.conn.execute(
            "INSERT INTO notes (id, title, content, create_date, modified_date)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                row.id.to_string(),
                row.title.as_str(),
                row.content.as_str(),
                row.create_date.to_rfc3339(),
                row.modified_date.to_rfc3339(),
            ],
        )?;

        // Read back what the store persisted rather than echoing the input.
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([row.id.to_string()])?;
        match rows.next()? {
            Some(found) => Ok(parse_note_row(found)?.into_wire()),
            None => Err(RepoError::InvalidData(
                "created note missing in read-back".to_string(),
            )),
        }
    }

    fn list_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?.into_wire());
        }

        if notes.is_empty() {
            return Err(RepoError::NotFound { resource: "notes" });
        }

        Ok(notes)
    }

    fn find_by_key(&self, title: &str) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} WHERE title = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([title])?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?.into_wire());
        }

        if notes.is_empty() {
            return Err(RepoError::NotFound { resource: "notes" });
        }

        Ok(notes)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<NoteRow> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in notes.id"))
    })?;

    Ok(NoteRow {
        id,
        title: row.get("title")?,
        content: row.get("content")?,
        create_date: parse_date(row, "create_date")?,
        modified_date: parse_date(row, "modified_date")?,
    })
}

fn parse_date(row: &Row<'_>, column: &'static str) -> RepoResult<DateTime<Utc>> {
    let text: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| {
            RepoError::InvalidData(format!("invalid date value `{text}` in notes.{column}"))
        })
}
