//! Shopping list wire/stored shapes and their mapping.
//!
//! A shopping list exclusively owns its items: an item row cannot exist
//! without its parent list id, and items are only ever written as part of
//! list creation. Neither shape carries timestamps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a shopping list.
pub type ShoppingListId = Uuid;

/// Stable identifier for a shopping list item.
pub type ItemId = Uuid;

/// Wire-facing input for one item inside a list-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    #[serde(default)]
    pub extra_info: Option<String>,
    pub quantity: i64,
}

/// Wire-facing item returned to clients. Identity stays server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub extra_info: Option<String>,
    pub quantity: i64,
}

/// Wire-facing input for shopping list creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShoppingListDraft {
    /// List name, unique system-wide (store-enforced).
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
}

/// Wire-facing shopping list with its mapped item sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ShoppingListId,
    pub name: String,
    pub items: Vec<Item>,
}

/// Stored representation of one `shopping_lists` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListRow {
    pub id: ShoppingListId,
    pub name: String,
}

/// Stored representation of one `shopping_list_items` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub extra_info: Option<String>,
    pub quantity: i64,
    pub shopping_list_id: ShoppingListId,
}

impl ShoppingListRow {
    /// Maps a wire draft to a stored list row, assigning a fresh identity.
    /// Items are mapped separately once the list id is known.
    pub fn from_draft(draft: &ShoppingListDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
        }
    }
}

impl ItemRow {
    /// Maps a wire item draft to a stored row owned by `shopping_list_id`.
    pub fn from_draft(draft: &ItemDraft, shopping_list_id: ShoppingListId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            extra_info: draft.extra_info.clone(),
            quantity: draft.quantity,
            shopping_list_id,
        }
    }

    /// Maps a stored row to its wire-facing shape, dropping identity.
    pub fn into_wire(self) -> Item {
        Item {
            name: self.name,
            extra_info: self.extra_info,
            quantity: self.quantity,
        }
    }
}

impl ShoppingList {
    /// Assembles the wire shape from a list row and its item rows.
    /// Item order follows the given sequence (retrieval order).
    pub fn from_rows(list: ShoppingListRow, items: Vec<ItemRow>) -> Self {
        Self {
            id: list.id,
            name: list.name,
            items: items.into_iter().map(ItemRow::into_wire).collect(),
        }
    }
}
