//! Application state with repository-based storage.
//!
//! The state is cloned into every request by axum's `State` extractor; it
//! holds the repositories as trait objects so handlers never reach for a
//! process-wide connection.

use std::{sync::Arc, time::Duration};

use storehouse_core::storage::{ItemRepository, RepositoryError, StoreRepository};

use crate::{
    config::Config,
    storage::{InMemoryRepository, SqliteRepository},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Store repository.
    pub store_repo: Arc<dyn StoreRepository>,
    /// Item repository.
    pub item_repo: Arc<dyn ItemRepository>,
    /// Listing size used when a request gives no `limit`.
    pub default_page_limit: u32,
    /// Upper bound on the time spent handling one request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates state from explicit repositories.
    pub fn new(
        config: &Config,
        store_repo: Arc<dyn StoreRepository>,
        item_repo: Arc<dyn ItemRepository>,
    ) -> Self {
        Self {
            store_repo,
            item_repo,
            default_page_limit: config.default_page_limit,
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates state backed by the SQLite database at `config.sqlite_path`.
    pub async fn sqlite(config: &Config) -> Result<Self, RepositoryError> {
        let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Ok(Self::new(config, repo.clone(), repo))
    }

    /// Creates state backed by in-memory storage.
    pub fn in_memory(config: &Config) -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        tracing::info!("Using in-memory storage");
        Self::new(config, repo.clone(), repo)
    }
}
