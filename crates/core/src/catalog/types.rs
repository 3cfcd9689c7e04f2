use serde::{Deserialize, Serialize};

/// Maximum length of a store or item name.
pub const NAME_MAX_LEN: usize = 80;

/// Maximum length of an item description.
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// A priced item that belongs to exactly one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub store_id: i64,
}

impl Item {
    /// Creates an item with the given fields and no description.
    pub fn new(id: i64, name: impl Into<String>, price: f64, store_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: None,
            store_id,
        }
    }

    /// Sets the description for this item.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named store together with the items it owns.
///
/// Deleting a store removes every item whose `store_id` points at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Store {
    /// Creates a store with no items.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Attaches the owned items.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}
