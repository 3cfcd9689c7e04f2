//! SQLite repository implementation.
//!
//! Implements the repository traits from `storehouse_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use storehouse_core::catalog::{CreateItemRequest, CreateStoreRequest, Item, Store};
use storehouse_core::storage::{ItemRepository, Page, RepositoryError, Result, StoreRepository};

use super::conversions::{page_param, row_to_item, row_to_store};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Loads the items owned by a store.
fn select_items_for_store(
    conn: &rusqlite::Connection,
    store_id: i64,
) -> rusqlite::Result<Vec<Item>> {
    let mut stmt = conn.prepare(schema::SELECT_ITEMS_BY_STORE)?;
    let rows = stmt.query_map([store_id], row_to_item)?;
    rows.collect()
}

/// Runs a single-row store query and attaches the store's items.
fn select_store<P: rusqlite::Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<Option<Store>> {
    let mut stmt = conn.prepare(sql)?;
    match stmt.query_row(params, row_to_store) {
        Ok(store) => {
            let items = select_items_for_store(conn, store.id)?;
            Ok(Some(store.with_items(items)))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Runs a single-row item query.
fn select_item<P: rusqlite::Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
) -> rusqlite::Result<Option<Item>> {
    let mut stmt = conn.prepare(sql)?;
    match stmt.query_row(params, row_to_item) {
        Ok(item) => Ok(Some(item)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// SQLite-based repository implementation.
///
/// Owns a single connection; every repository call runs as one closure on the
/// connection's worker thread, so the connection is held only for the
/// duration of that call.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file and its parent directory are created if missing.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
            }
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize connection settings and the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CONNECTION_PRAGMAS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// StoreRepository implementation
// ============================================================================

#[async_trait]
impl StoreRepository for SqliteRepository {
    async fn create_store(&self, request: &CreateStoreRequest) -> Result<Store> {
        let name = request.name.clone();
        let store_name = request.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_STORE, [&name])
                    .map_err(wrap_err)?;
                Ok(Store::new(conn.last_insert_rowid(), name))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Store", store_name))
    }

    async fn get_store(&self, id: i64) -> Result<Option<Store>> {
        self.conn
            .call(move |conn| select_store(conn, schema::SELECT_STORE_BY_ID, [id]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Store", id.to_string()))
    }

    async fn get_store_by_name(&self, name: &str) -> Result<Option<Store>> {
        let name = name.to_string();
        let store_name = name.clone();

        self.conn
            .call(move |conn| {
                select_store(conn, schema::SELECT_STORE_BY_NAME, [&name]).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Store", store_name))
    }

    async fn list_stores(&self, page: Page) -> Result<Vec<Store>> {
        let limit = page_param(page.limit);
        let skip = page_param(page.skip);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_STORES_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, skip], row_to_store)
                    .map_err(wrap_err)?;

                let mut stores = Vec::new();
                for row_result in rows {
                    let store = row_result.map_err(wrap_err)?;
                    let items = select_items_for_store(conn, store.id).map_err(wrap_err)?;
                    stores.push(store.with_items(items));
                }
                Ok(stores)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Store"))
    }

    async fn update_store(&self, store: &Store) -> Result<Store> {
        let id = store.id;
        let name = store.name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_STORE, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                let items = select_items_for_store(conn, id).map_err(wrap_err)?;
                Ok(Store::new(id, name).with_items(items))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Store", id.to_string()))
    }

    async fn delete_store(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let removed_items = tx
                    .execute(schema::DELETE_ITEMS_BY_STORE, [id])
                    .map_err(wrap_err)?;
                tx.execute(schema::DELETE_STORE, [id]).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(removed_items)
            })
            .await
            .map(|removed_items| {
                tracing::debug!(store_id = id, removed_items, "Deleted store rows");
            })
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Store", id.to_string()))
    }
}

// ============================================================================
// ItemRepository implementation
// ============================================================================

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let request = request.clone();
        let item_name = request.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![
                        request.name,
                        request.price,
                        request.description,
                        request.store_id
                    ],
                )
                .map_err(wrap_err)?;
                Ok(request.into_item(conn.last_insert_rowid()))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", item_name))
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| select_item(conn, schema::SELECT_ITEM_BY_ID, [id]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn get_item_by_name(&self, name: &str) -> Result<Option<Item>> {
        let name = name.to_string();
        let item_name = name.clone();

        self.conn
            .call(move |conn| {
                select_item(conn, schema::SELECT_ITEM_BY_NAME, [&name]).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", item_name))
    }

    async fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        let limit = page_param(page.limit);
        let skip = page_param(page.skip);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ITEMS_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, skip], row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Item"))
    }

    async fn update_item(&self, item: &Item) -> Result<Item> {
        let item = item.clone();
        let id = item.id;

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ITEM,
                        rusqlite::params![
                            item.id,
                            item.name,
                            item.price,
                            item.description,
                            item.store_id
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(item)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id.to_string()))
    }
}
