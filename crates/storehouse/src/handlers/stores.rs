//! Store CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use storehouse_core::catalog::{CreateStoreRequest, Store, UpdateStoreRequest};

use super::{
    error::{ApiError, STORE_EXISTS, STORE_NOT_FOUND},
    query::ListQuery,
};
use crate::state::AppState;

async fn require_store(state: &AppState, id: i64) -> Result<Store, ApiError> {
    state
        .store_repo
        .get_store(id)
        .await?
        .ok_or(ApiError::NotFound(STORE_NOT_FOUND))
}

/// Create a new store (POST /stores).
pub async fn create_store(
    State(state): State<AppState>,
    payload: Result<Json<CreateStoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Store>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if state
        .store_repo
        .get_store_by_name(&payload.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(STORE_EXISTS));
    }

    let store = state.store_repo.create_store(&payload).await?;

    tracing::info!(store_id = store.id, name = %store.name, "Created new store");

    Ok((StatusCode::CREATED, Json(store)))
}

/// List stores with their items (GET /stores), optionally filtered by name.
pub async fn list_stores(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Store>>, ApiError> {
    let Query(query) = query?;

    let stores = match query.name() {
        Some(name) => state
            .store_repo
            .get_store_by_name(name)
            .await?
            .into_iter()
            .collect(),
        None => {
            state
                .store_repo
                .list_stores(query.page(state.default_page_limit))
                .await?
        }
    };

    Ok(Json(stores))
}

/// Get a single store by ID (GET /stores/{id}).
pub async fn get_store(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Store>, ApiError> {
    let Path(id) = id?;
    require_store(&state, id).await.map(Json)
}

/// Rename a store (PUT /stores/{id}).
pub async fn update_store(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStoreRequest>, JsonRejection>,
) -> Result<Json<Store>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let mut store = require_store(&state, id).await?;

    if let Some(existing) = state.store_repo.get_store_by_name(&payload.name).await? {
        if existing.id != id {
            return Err(ApiError::Conflict(STORE_EXISTS));
        }
    }

    payload.apply_to(&mut store);
    let store = state.store_repo.update_store(&store).await?;

    tracing::info!(store_id = store.id, "Updated store");

    Ok(Json(store))
}

/// Delete a store and all of its items (DELETE /stores/{id}).
pub async fn delete_store(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Path(id) = id?;
    let store = require_store(&state, id).await?;

    state.store_repo.delete_store(id).await?;

    tracing::info!(store_id = id, items = store.items.len(), "Deleted store and its items");

    Ok(Json("Store deleted successfully!"))
}
