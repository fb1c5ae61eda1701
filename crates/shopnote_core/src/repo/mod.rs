//! Query layer: the only component that touches the persistence schema.
//!
//! # Responsibility
//! - Define the shared create/list/find contract over both resource kinds.
//! - Isolate SQLite query details from the request boundary.
//!
//! # Invariants
//! - Absence is reported through `RepoError::NotFound`, an explicit result
//!   variant the boundary can branch on. Empty listings count as absence.
//! - Store-level uniqueness failures surface as `RepoError::Constraint`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod shopping_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Query-layer error for persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    /// Transport or migration failure from the store.
    Db(DbError),
    /// Zero rows matched a listing or lookup.
    NotFound { resource: &'static str },
    /// The store rejected a write for violating a schema constraint,
    /// e.g. a duplicate shopping list name.
    Constraint(String),
    /// Persisted state could not be decoded into a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { resource } => write!(f, "no {resource} matched the query"),
            Self::Constraint(message) => write!(f, "constraint violation: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, ref message) = value {
            if code.code == rusqlite::ErrorCode::ConstraintViolation {
                return Self::Constraint(
                    message.clone().unwrap_or_else(|| code.to_string()),
                );
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Shared create/list/find capability implemented by every resource
/// repository. Both resources follow the same shape (wire draft in, wire
/// record out, lookup by one textual key), so the boundary programs against
/// one contract instead of duplicating it per resource.
pub trait ResourceRepository {
    /// Wire-facing creation input.
    type Draft;
    /// Wire-facing record returned by every operation.
    type Record;

    /// Maps the draft to stored rows, persists them and returns the
    /// wire-facing record with server-assigned identity.
    fn create(&self, draft: &Self::Draft) -> RepoResult<Self::Record>;

    /// Returns all records in creation order.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when the table is empty. Deliberate policy:
    ///   at this layer an empty table is indistinguishable from "nothing
    ///   found".
    fn list_all(&self) -> RepoResult<Vec<Self::Record>>;

    /// Returns all records whose key matches `key` exactly
    /// (case-sensitive, as stored).
    ///
    /// # Errors
    /// - `RepoError::NotFound` when zero rows match.
    fn find_by_key(&self, key: &str) -> RepoResult<Vec<Self::Record>>;
}
