//! Dependency-injected store handle and scoped sessions.
//!
//! # Responsibility
//! - Own the database location as an explicitly constructed value that
//!   callers pass around; there is no process-global connection state.
//! - Hand out one scoped connection per unit of work.
//!
//! # Invariants
//! - `open` fails fast: migrations run and configuration errors surface
//!   before the handle is returned.
//! - The session connection is dropped on every exit path of
//!   `with_session`, including errors.

use crate::db::{open_db, DbResult};
use crate::repo::{RepoError, RepoResult};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Cheaply cloneable handle to the SQLite database backing the system.
#[derive(Debug, Clone)]
pub struct Store {
    path: Arc<PathBuf>,
}

impl Store {
    /// Opens the database once, applying pending migrations, and returns
    /// a handle for scoped per-request sessions.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        // Probe connection: runs migrations and validates the file now
        // instead of on the first request.
        drop(open_db(&path)?);
        Ok(Self {
            path: Arc::new(path),
        })
    }

    /// Returns the database file location.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Runs `f` against a fresh scoped connection.
    ///
    /// The connection is opened for this call only and closed when the
    /// closure returns, success or error.
    pub fn with_session<T>(&self, f: impl FnOnce(&Connection) -> RepoResult<T>) -> RepoResult<T> {
        let conn = open_db(self.path.as_path()).map_err(RepoError::Db)?;
        f(&conn)
    }
}
