use super::error::{ItemError, StoreError};
use super::types::{DESCRIPTION_MAX_LEN, NAME_MAX_LEN};

/// Validates a store name before creation or update.
pub fn validate_store_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(StoreError::NameTooLong);
    }
    Ok(())
}

/// Validates the mutable fields of an item before creation or update.
pub fn validate_item(name: &str, price: f64, description: Option<&str>) -> Result<(), ItemError> {
    if name.trim().is_empty() {
        return Err(ItemError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ItemError::NameTooLong);
    }
    if !price.is_finite() {
        return Err(ItemError::InvalidPrice);
    }
    if description.is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LEN) {
        return Err(ItemError::DescriptionTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_store_name() {
        assert!(validate_store_name("Acme").is_ok());
    }

    #[test]
    fn test_blank_store_name_is_rejected() {
        assert_eq!(validate_store_name("   "), Err(StoreError::EmptyName));
    }

    #[test]
    fn test_store_name_length_boundary() {
        assert!(validate_store_name(&"a".repeat(80)).is_ok());
        assert_eq!(
            validate_store_name(&"a".repeat(81)),
            Err(StoreError::NameTooLong)
        );
    }

    #[test]
    fn test_store_name_length_counts_characters() {
        // 80 multi-byte characters is still within bounds
        assert!(validate_store_name(&"é".repeat(80)).is_ok());
    }

    #[test]
    fn test_valid_item() {
        assert!(validate_item("Widget", 9.99, Some("A small widget")).is_ok());
        assert!(validate_item("Widget", 0.0, None).is_ok());
    }

    #[test]
    fn test_item_name_rules() {
        assert_eq!(validate_item("", 1.0, None), Err(ItemError::EmptyName));
        assert_eq!(
            validate_item(&"x".repeat(81), 1.0, None),
            Err(ItemError::NameTooLong)
        );
    }

    #[test]
    fn test_item_description_length_boundary() {
        let ok = "d".repeat(200);
        let too_long = "d".repeat(201);

        assert!(validate_item("Widget", 1.0, Some(&ok)).is_ok());
        assert_eq!(
            validate_item("Widget", 1.0, Some(&too_long)),
            Err(ItemError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_item_price_must_be_finite() {
        assert_eq!(
            validate_item("Widget", f64::NAN, None),
            Err(ItemError::InvalidPrice)
        );
        assert_eq!(
            validate_item("Widget", f64::INFINITY, None),
            Err(ItemError::InvalidPrice)
        );
    }
}
