//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// Connection-level settings applied before any query runs.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// SQL statement to create all tables.
///
/// The foreign key has no `ON DELETE` action: removing a store's items is
/// done explicitly by the repository inside the same transaction.
pub const CREATE_TABLES: &str = r#"
-- Stores table
CREATE TABLE IF NOT EXISTS stores (
    id INTEGER PRIMARY KEY,
    name VARCHAR(80) NOT NULL UNIQUE
);

-- Items table
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY,
    name VARCHAR(80) NOT NULL UNIQUE,
    price REAL NOT NULL,
    description VARCHAR(200),
    store_id INTEGER NOT NULL,
    FOREIGN KEY (store_id) REFERENCES stores(id)
);

CREATE INDEX IF NOT EXISTS idx_items_store_id ON items(store_id);
"#;

// Store queries
pub const INSERT_STORE: &str = r#"
INSERT INTO stores (name)
VALUES (?1)
"#;

pub const SELECT_STORE_BY_ID: &str = r#"
SELECT id, name
FROM stores
WHERE id = ?1
"#;

pub const SELECT_STORE_BY_NAME: &str = r#"
SELECT id, name
FROM stores
WHERE name = ?1
LIMIT 1
"#;

pub const SELECT_STORES_PAGE: &str = r#"
SELECT id, name
FROM stores
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_STORE: &str = r#"
UPDATE stores
SET name = ?2
WHERE id = ?1
"#;

pub const DELETE_STORE: &str = r#"
DELETE FROM stores
WHERE id = ?1
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, price, description, store_id)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, price, description, store_id
FROM items
WHERE id = ?1
"#;

pub const SELECT_ITEM_BY_NAME: &str = r#"
SELECT id, name, price, description, store_id
FROM items
WHERE name = ?1
LIMIT 1
"#;

pub const SELECT_ITEMS_PAGE: &str = r#"
SELECT id, name, price, description, store_id
FROM items
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const SELECT_ITEMS_BY_STORE: &str = r#"
SELECT id, name, price, description, store_id
FROM items
WHERE store_id = ?1
ORDER BY id ASC
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, price = ?3, description = ?4, store_id = ?5
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

pub const DELETE_ITEMS_BY_STORE: &str = r#"
DELETE FROM items
WHERE store_id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS stores"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS items"));
        assert!(CREATE_TABLES.contains("REFERENCES stores(id)"));
    }

    #[test]
    fn test_foreign_keys_are_enabled() {
        assert!(CONNECTION_PRAGMAS.contains("foreign_keys = ON"));
    }

    #[test]
    fn test_cascade_is_not_delegated_to_sqlite() {
        assert!(!CREATE_TABLES.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_STORE.contains("INSERT"));
        assert!(SELECT_STORE_BY_NAME.contains("LIMIT 1"));
        assert!(SELECT_STORES_PAGE.contains("OFFSET"));
        assert!(UPDATE_STORE.contains("UPDATE"));
        assert!(DELETE_STORE.contains("DELETE"));

        assert!(INSERT_ITEM.contains("INSERT"));
        assert!(SELECT_ITEM_BY_NAME.contains("LIMIT 1"));
        assert!(SELECT_ITEMS_PAGE.contains("OFFSET"));
        assert!(SELECT_ITEMS_BY_STORE.contains("store_id = ?1"));
        assert!(UPDATE_ITEM.contains("UPDATE"));
        assert!(DELETE_ITEMS_BY_STORE.contains("store_id = ?1"));
    }
}
