//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.

use rusqlite::Row;

use storehouse_core::catalog::{Item, Store};

/// Convert a SQLite row to a Store without its items.
///
/// Expected columns: id, name
pub fn row_to_store(row: &Row) -> rusqlite::Result<Store> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;

    Ok(Store::new(id, name))
}

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, name, price, description, store_id
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        description: row.get(3)?,
        store_id: row.get(4)?,
    })
}

/// Convert a page bound to a SQLite integer parameter.
pub fn page_param(value: u32) -> i64 {
    i64::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn query_one<T>(sql: &str, f: fn(&Row) -> rusqlite::Result<T>) -> T {
        let conn = Connection::open_in_memory().unwrap();
        conn.query_row(sql, [], f).unwrap()
    }

    #[test]
    fn test_row_to_store() {
        let store = query_one("SELECT 7, 'Acme'", row_to_store);

        assert_eq!(store, Store::new(7, "Acme"));
    }

    #[test]
    fn test_row_to_item_with_description() {
        let item = query_one("SELECT 1, 'Widget', 9.99, 'blue', 3", row_to_item);

        assert_eq!(item, Item::new(1, "Widget", 9.99, 3).with_description("blue"));
    }

    #[test]
    fn test_row_to_item_null_description() {
        let item = query_one("SELECT 1, 'Widget', 9.99, NULL, 3", row_to_item);

        assert_eq!(item.description, None);
    }

    #[test]
    fn test_row_to_item_integer_price() {
        // SQLite hands back INTEGER when the stored REAL has no fraction
        let item = query_one("SELECT 1, 'Widget', 10, NULL, 3", row_to_item);

        assert_eq!(item.price, 10.0);
    }

    #[test]
    fn test_page_param() {
        assert_eq!(page_param(u32::MAX), 4_294_967_295);
    }
}
