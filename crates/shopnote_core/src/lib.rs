//! Core domain logic for shopnote.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::note::{Note, NoteDraft, NoteId, NoteRow};
pub use model::shopping::{
    Item, ItemDraft, ItemRow, ShoppingList, ShoppingListDraft, ShoppingListId, ShoppingListRow,
};
pub use repo::note_repo::SqliteNoteRepository;
pub use repo::shopping_repo::SqliteShoppingListRepository;
pub use repo::{RepoError, RepoResult, ResourceRepository};
pub use store::Store;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
