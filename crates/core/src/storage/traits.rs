use async_trait::async_trait;

use crate::catalog::{CreateItemRequest, CreateStoreRequest, Item, Store};

use super::{Page, Result};

/// Repository for store operations.
///
/// Stores are returned with their owned items attached.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Inserts a new store and returns it with its generated id.
    ///
    /// Callers check name uniqueness beforehand; a collision that slips past
    /// the check surfaces as [`RepositoryError::AlreadyExists`].
    ///
    /// [`RepositoryError::AlreadyExists`]: super::RepositoryError::AlreadyExists
    async fn create_store(&self, request: &CreateStoreRequest) -> Result<Store>;

    /// Gets a store by its id.
    async fn get_store(&self, id: i64) -> Result<Option<Store>>;

    /// Gets the first store with the given name.
    async fn get_store_by_name(&self, name: &str) -> Result<Option<Store>>;

    /// Lists stores within the given window.
    async fn list_stores(&self, page: Page) -> Result<Vec<Store>>;

    /// Replaces an existing store. Fails with `NotFound` if the id is absent.
    async fn update_store(&self, store: &Store) -> Result<Store>;

    /// Deletes a store and every item it owns. Absent ids are a no-op.
    async fn delete_store(&self, id: i64) -> Result<()>;
}

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item and returns it with its generated id.
    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item>;

    /// Gets an item by its id.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Gets the first item with the given name.
    async fn get_item_by_name(&self, name: &str) -> Result<Option<Item>>;

    /// Lists items within the given window.
    async fn list_items(&self, page: Page) -> Result<Vec<Item>>;

    /// Replaces an existing item. Fails with `NotFound` if the id is absent.
    async fn update_item(&self, item: &Item) -> Result<Item>;

    /// Deletes an item by its id. Absent ids are a no-op.
    async fn delete_item(&self, id: i64) -> Result<()>;
}
