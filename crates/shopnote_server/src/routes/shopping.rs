//! Shopping list endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shopnote_core::{
    RepoError, ResourceRepository, ShoppingList, ShoppingListDraft, SqliteShoppingListRepository,
};

use crate::error::ApiError;
use crate::routes::run_session;
use crate::AppState;

/// Envelope for single-list responses.
#[derive(Debug, Serialize)]
pub struct ResponseShoppingList {
    pub shopping_list: ShoppingList,
}

/// Envelope for multi-list responses.
#[derive(Debug, Serialize)]
pub struct ResponseListShoppingLists {
    pub shopping_lists: Vec<ShoppingList>,
}

#[derive(Debug, Deserialize)]
pub struct ListNameQuery {
    pub name: String,
}

/// POST /shopping-list — creates a list with its initial items.
/// A duplicate name maps to 409 via the store's UNIQUE constraint.
pub async fn create_shopping_list(
    State(state): State<AppState>,
    Json(draft): Json<ShoppingListDraft>,
) -> Result<(StatusCode, Json<ResponseShoppingList>), ApiError> {
    let created = run_session(state.store.clone(), move |conn| {
        SqliteShoppingListRepository::new(conn).create(&draft)
    })
    .await?;

    match created {
        Ok(shopping_list) => Ok((
            StatusCode::CREATED,
            Json(ResponseShoppingList { shopping_list }),
        )),
        Err(err) => Err(err.into()),
    }
}

/// GET /shopping-lists — lists every shopping list with its items;
/// 404 when none exist.
pub async fn list_shopping_lists(
    State(state): State<AppState>,
) -> Result<Json<ResponseListShoppingLists>, ApiError> {
    let listed = run_session(state.store.clone(), |conn| {
        SqliteShoppingListRepository::new(conn).list_all()
    })
    .await?;

    match listed {
        Ok(shopping_lists) => Ok(Json(ResponseListShoppingLists { shopping_lists })),
        Err(RepoError::NotFound { .. }) => {
            Err(ApiError::NotFound("No shopping lists found".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /shopping-list?name= — returns the uniquely named list with items.
pub async fn find_shopping_list_by_name(
    State(state): State<AppState>,
    Query(query): Query<ListNameQuery>,
) -> Result<Json<ResponseShoppingList>, ApiError> {
    let name = query.name;
    let found = run_session(state.store.clone(), {
        let name = name.clone();
        move |conn| SqliteShoppingListRepository::new(conn).find_by_key(&name)
    })
    .await?;

    let not_found = || ApiError::NotFound(format!("No shopping list found with name '{name}'"));
    match found {
        Ok(lists) => match lists.into_iter().next() {
            Some(shopping_list) => Ok(Json(ResponseShoppingList { shopping_list })),
            None => Err(not_found()),
        },
        Err(RepoError::NotFound { .. }) => Err(not_found()),
        Err(err) => Err(err.into()),
    }
}
