//! API request types for store and item operations.
//!
//! These are the input shapes accepted by the HTTP layer. They carry no
//! generated ids (except the full-record update shapes) and are checked with
//! the pure validators in [`super::operations`].

use serde::{Deserialize, Serialize};

use super::error::{ItemError, StoreError};
use super::operations::{validate_item, validate_store_name};
use super::types::{Item, Store};

/// Request payload for creating a new store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStoreRequest {
    pub name: String,
}

impl CreateStoreRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        validate_store_name(&self.name)
    }
}

/// Request payload for replacing a store.
///
/// The body carries the full store shape; the `id` in the path is the one
/// that identifies the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStoreRequest {
    pub id: i64,
    pub name: String,
}

impl UpdateStoreRequest {
    pub fn validate(&self) -> Result<(), StoreError> {
        validate_store_name(&self.name)
    }

    /// Replaces the mutable fields of an existing store.
    pub fn apply_to(self, store: &mut Store) {
        store.name = self.name;
    }
}

/// Request payload for creating a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub store_id: i64,
}

impl CreateItemRequest {
    pub fn new(name: impl Into<String>, price: f64, store_id: i64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            store_id,
        }
    }

    /// Set the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), ItemError> {
        validate_item(&self.name, self.price, self.description.as_deref())
    }

    /// Builds the stored record once an id has been assigned.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            store_id: self.store_id,
        }
    }
}

/// Request payload for replacing an item.
///
/// Full-record semantics: every mutable field is overwritten, so an absent
/// `description` clears the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub store_id: i64,
}

impl UpdateItemRequest {
    pub fn validate(&self) -> Result<(), ItemError> {
        validate_item(&self.name, self.price, self.description.as_deref())
    }

    /// Replaces name, price, description and store of an existing item.
    pub fn apply_to(self, item: &mut Item) {
        item.name = self.name;
        item.price = self.price;
        item.description = self.description;
        item.store_id = self.store_id;
    }
}
