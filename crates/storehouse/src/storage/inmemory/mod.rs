//! In-memory storage backend.
//!
//! Keeps stores and items in `BTreeMap`s behind a single `tokio::sync::RwLock`,
//! so multi-table operations such as cascade deletes are atomic. Nothing is
//! persisted.

mod repository;

pub use repository::InMemoryRepository;
