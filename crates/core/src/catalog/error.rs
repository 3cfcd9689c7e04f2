use thiserror::Error;

/// Errors that can occur when validating a store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store name cannot be empty")]
    EmptyName,
    #[error("Store name too long (max 80 characters)")]
    NameTooLong,
}

/// Errors that can occur when validating an item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item name too long (max 80 characters)")]
    NameTooLong,
    #[error("Item description too long (max 200 characters)")]
    DescriptionTooLong,
    #[error("Item price must be a finite number")]
    InvalidPrice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::EmptyName.to_string(), "Store name cannot be empty");
        assert_eq!(
            StoreError::NameTooLong.to_string(),
            "Store name too long (max 80 characters)"
        );
    }

    #[test]
    fn test_item_error_display() {
        assert_eq!(
            ItemError::DescriptionTooLong.to_string(),
            "Item description too long (max 200 characters)"
        );
    }
}
