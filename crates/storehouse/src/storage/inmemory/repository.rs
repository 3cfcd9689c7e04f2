//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use storehouse_core::catalog::{CreateItemRequest, CreateStoreRequest, Item, Store};
use storehouse_core::storage::{ItemRepository, Page, RepositoryError, Result, StoreRepository};

/// Rows of both tables. Stores are kept without their items; reads attach them.
#[derive(Debug)]
struct Tables {
    stores: BTreeMap<i64, Store>,
    items: BTreeMap<i64, Item>,
    next_store_id: i64,
    next_item_id: i64,
}

impl Tables {
    fn items_for_store(&self, store_id: i64) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.store_id == store_id)
            .cloned()
            .collect()
    }

    fn with_items(&self, store: &Store) -> Store {
        store.clone().with_items(self.items_for_store(store.id))
    }

    fn store_name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.stores
            .values()
            .any(|s| s.name == name && Some(s.id) != except)
    }

    fn item_name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.items
            .values()
            .any(|i| i.name == name && Some(i.id) != except)
    }

    fn check_store_reference(&self, store_id: i64) -> Result<()> {
        if self.stores.contains_key(&store_id) {
            Ok(())
        } else {
            Err(RepositoryError::InvalidData(
                "Foreign key constraint violation for Item".to_string(),
            ))
        }
    }
}

fn window<T>(values: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    values
        .skip(page.skip as usize)
        .take(page.limit as usize)
        .collect()
}

/// In-memory storage backend.
///
/// Mirrors the SQLite backend's constraints: unique names, a live parent
/// store for every item, and ids assigned from 1 upwards.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                stores: BTreeMap::new(),
                items: BTreeMap::new(),
                next_store_id: 1,
                next_item_id: 1,
            })),
        }
    }
}

#[async_trait]
impl StoreRepository for InMemoryRepository {
    async fn create_store(&self, request: &CreateStoreRequest) -> Result<Store> {
        let mut tables = self.tables.write().await;
        if tables.store_name_taken(&request.name, None) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Store",
                id: request.name.clone(),
            });
        }
        let store = Store::new(tables.next_store_id, request.name.clone());
        tables.next_store_id += 1;
        tables.stores.insert(store.id, store.clone());
        Ok(store)
    }

    async fn get_store(&self, id: i64) -> Result<Option<Store>> {
        let tables = self.tables.read().await;
        Ok(tables.stores.get(&id).map(|s| tables.with_items(s)))
    }

    async fn get_store_by_name(&self, name: &str) -> Result<Option<Store>> {
        let tables = self.tables.read().await;
        Ok(tables
            .stores
            .values()
            .find(|s| s.name == name)
            .map(|s| tables.with_items(s)))
    }

    async fn list_stores(&self, page: Page) -> Result<Vec<Store>> {
        let tables = self.tables.read().await;
        Ok(window(
            tables.stores.values().map(|s| tables.with_items(s)),
            page,
        ))
    }

    async fn update_store(&self, store: &Store) -> Result<Store> {
        let mut tables = self.tables.write().await;
        if !tables.stores.contains_key(&store.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Store",
                id: store.id.to_string(),
            });
        }
        if tables.store_name_taken(&store.name, Some(store.id)) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Store",
                id: store.id.to_string(),
            });
        }
        let row = Store::new(store.id, store.name.clone());
        tables.stores.insert(row.id, row.clone());
        Ok(tables.with_items(&row))
    }

    async fn delete_store(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.items.retain(|_, item| item.store_id != id);
        tables.stores.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn create_item(&self, request: &CreateItemRequest) -> Result<Item> {
        let mut tables = self.tables.write().await;
        if tables.item_name_taken(&request.name, None) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: request.name.clone(),
            });
        }
        tables.check_store_reference(request.store_id)?;
        let item = request.clone().into_item(tables.next_item_id);
        tables.next_item_id += 1;
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.items.get(&id).cloned())
    }

    async fn get_item_by_name(&self, name: &str) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.items.values().find(|i| i.name == name).cloned())
    }

    async fn list_items(&self, page: Page) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(window(tables.items.values().cloned(), page))
    }

    async fn update_item(&self, item: &Item) -> Result<Item> {
        let mut tables = self.tables.write().await;
        if !tables.items.contains_key(&item.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Item",
                id: item.id.to_string(),
            });
        }
        if tables.item_name_taken(&item.name, Some(item.id)) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Item",
                id: item.id.to_string(),
            });
        }
        tables.check_store_reference(item.store_id)?;
        tables.items.insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.items.remove(&id);
        Ok(())
    }
}
