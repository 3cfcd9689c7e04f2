//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `storehouse_core::storage`. The backend is chosen at startup with
//! `--storage` (or `STORAGE_BACKEND`).
//!
//! - `sqlite` (default): SQLite via `rusqlite` and `tokio-rusqlite`
//! - `memory`: process-local maps, nothing persisted

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
