//! Item CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use storehouse_core::catalog::{CreateItemRequest, Item, UpdateItemRequest};

use super::{
    error::{ApiError, ITEM_EXISTS, ITEM_NOT_FOUND, STORE_NOT_FOUND},
    query::ListQuery,
};
use crate::state::AppState;

/// Fetches an item or fails with 404.
async fn require_item(state: &AppState, id: i64) -> Result<Item, ApiError> {
    state
        .item_repo
        .get_item(id)
        .await?
        .ok_or(ApiError::NotFound(ITEM_NOT_FOUND))
}

/// Fails with 400 unless the referenced store exists.
async fn require_parent_store(state: &AppState, store_id: i64) -> Result<(), ApiError> {
    match state.store_repo.get_store(store_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::BadReference(STORE_NOT_FOUND)),
    }
}

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if state
        .item_repo
        .get_item_by_name(&payload.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(ITEM_EXISTS));
    }
    require_parent_store(&state, payload.store_id).await?;

    let item = state.item_repo.create_item(&payload).await?;

    tracing::info!(
        item_id = item.id,
        name = %item.name,
        store_id = item.store_id,
        "Created new item"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// List items (GET /items), optionally filtered by exact name.
///
/// A name filter yields at most one item; an unknown name yields an empty list.
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let Query(query) = query?;

    let items = match query.name() {
        Some(name) => state
            .item_repo
            .get_item_by_name(name)
            .await?
            .into_iter()
            .collect(),
        None => {
            state
                .item_repo
                .list_items(query.page(state.default_page_limit))
                .await?
        }
    };

    Ok(Json(items))
}

/// Get a single item by ID (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    require_item(&state, id).await.map(Json)
}

/// Replace an item (PUT /items/{id}).
///
/// Name, price, description and store are all overwritten. The id in the body
/// is required but the path id selects the record.
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let mut item = require_item(&state, id).await?;

    if let Some(existing) = state.item_repo.get_item_by_name(&payload.name).await? {
        if existing.id != id {
            return Err(ApiError::Conflict(ITEM_EXISTS));
        }
    }
    require_parent_store(&state, payload.store_id).await?;

    payload.apply_to(&mut item);
    let item = state.item_repo.update_item(&item).await?;

    tracing::info!(item_id = item.id, "Updated item");

    Ok(Json(item))
}

/// Delete an item by ID (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Path(id) = id?;
    require_item(&state, id).await?;

    state.item_repo.delete_item(id).await?;

    tracing::info!(item_id = id, "Deleted item");

    Ok(Json("Item deleted successfully!"))
}
