use serde::Deserialize;

use storehouse_core::storage::{Page, DEFAULT_SKIP};

/// Query parameters shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Exact-name filter. An empty value is treated as absent.
    pub name: Option<String>,
    /// Number of records to skip (default: 0)
    pub skip: Option<u32>,
    /// Maximum number of records to return (default: configured page limit)
    pub limit: Option<u32>,
}

impl ListQuery {
    /// The name filter, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The listing window, falling back to `default_limit`.
    pub fn page(&self, default_limit: u32) -> Page {
        Page::new(self.skip.unwrap_or(DEFAULT_SKIP), self.limit.unwrap_or(default_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_no_filter() {
        let query = ListQuery {
            name: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(query.name(), None);
    }

    #[test]
    fn test_page_defaults() {
        let query = ListQuery::default();

        assert_eq!(query.page(100), Page::new(0, 100));
    }

    #[test]
    fn test_page_overrides() {
        let query = ListQuery {
            skip: Some(5),
            limit: Some(2),
            ..Default::default()
        };

        assert_eq!(query.page(100), Page::new(5, 2));
    }
}
