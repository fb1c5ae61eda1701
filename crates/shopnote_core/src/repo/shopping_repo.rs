//! Shopping list repository: SQLite implementation of the resource contract.
//!
//! # Responsibility
//! - Persist shopping lists together with their owned items.
//! - Assemble wire-facing lists from list rows plus per-list item queries.
//!
//! # Invariants
//! - List names are unique; the UNIQUE constraint is store-enforced and
//!   surfaces as `RepoError::Constraint`.
//! - The list row is committed before item inserts start. A failed item
//!   insert leaves the (possibly partially filled) list persisted; the
//!   two-phase write is deliberately not atomic.
//! - Item order is pinned to insertion order (`rowid`).

use crate::model::shopping::{
    ItemRow, ShoppingList, ShoppingListDraft, ShoppingListId, ShoppingListRow,
};
use crate::repo::{RepoError, RepoResult, ResourceRepository};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const LIST_SELECT_SQL: &str = "SELECT id, name FROM shopping_lists";

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    name,
    extra_info,
    quantity,
    shopping_list_id
FROM shopping_list_items";

/// SQLite-backed shopping list repository over a borrowed session connection.
pub struct SqliteShoppingListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteShoppingListRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn load_items(&self, list_id: ShoppingListId) -> RepoResult<Vec<ItemRow>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL} WHERE shopping_list_id = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([list_id.to_string()])?;

        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }
}

impl ResourceRepository for SqliteShoppingListRepository<'_> {
    type Draft = ShoppingListDraft;
    type Record = ShoppingList;

    fn create(&self, draft: &ShoppingListDraft) -> RepoResult<ShoppingList> {
        let list_row = ShoppingListRow::from_draft(draft);

        // Autocommitted; the list persists even if an item insert below
        // fails. Concurrent readers can observe the list with fewer items
        // until the last insert lands.
        self.conn.execute(
            "INSERT INTO shopping_lists (id, name) VALUES (?1, ?2);",
            params![list_row.id.to_string(), list_row.name.as_str()],
        )?;

        let mut item_rows = Vec::with_capacity(draft.items.len());
        for item in &draft.items {
            let item_row = ItemRow::from_draft(item, list_row.id);
            self.conn.execute(
                "INSERT INTO shopping_list_items (id, name, extra_info, quantity, shopping_list_id)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    item_row.id.to_string(),
                    item_row.name.as_str(),
                    item_row.extra_info.as_deref(),
                    item_row.quantity,
                    item_row.shopping_list_id.to_string(),
                ],
            )?;
            item_rows.push(item_row);
        }

        // Assembled from the rows just written, not a re-read.
        Ok(ShoppingList::from_rows(list_row, item_rows))
    }

    fn list_all(&self) -> RepoResult<Vec<ShoppingList>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LIST_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;

        let mut list_rows = Vec::new();
        while let Some(row) = rows.next()? {
            list_rows.push(parse_list_row(row)?);
        }

        if list_rows.is_empty() {
            return Err(RepoError::NotFound {
                resource: "shopping lists",
            });
        }

        // One items query per list. N+1 by design; fine at this scale.
        let mut lists = Vec::with_capacity(list_rows.len());
        for list_row in list_rows {
            let items = self.load_items(list_row.id)?;
            lists.push(ShoppingList::from_rows(list_row, items));
        }

        Ok(lists)
    }

    fn find_by_key(&self, name: &str) -> RepoResult<Vec<ShoppingList>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LIST_SELECT_SQL} WHERE name = ?1 LIMIT 1;"))?;
        let mut rows = stmt.query([name])?;

        let list_row = match rows.next()? {
            Some(row) => parse_list_row(row)?,
            None => {
                return Err(RepoError::NotFound {
                    resource: "shopping lists",
                });
            }
        };

        let items = self.load_items(list_row.id)?;
        Ok(vec![ShoppingList::from_rows(list_row, items)])
    }
}

fn parse_list_row(row: &Row<'_>) -> RepoResult<ShoppingListRow> {
    Ok(ShoppingListRow {
        id: parse_uuid_column(row, "id", "shopping_lists.id")?,
        name: row.get("name")?,
    })
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<ItemRow> {
    Ok(ItemRow {
        id: parse_uuid_column(row, "id", "shopping_list_items.id")?,
        name: row.get("name")?,
        extra_info: row.get("extra_info")?,
        quantity: row.get("quantity")?,
        shopping_list_id: parse_uuid_column(
            row,
            "shopping_list_id",
            "shopping_list_items.shopping_list_id",
        )?,
    })
}

fn parse_uuid_column(row: &Row<'_>, column: &str, qualified: &str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in {qualified}")))
}
