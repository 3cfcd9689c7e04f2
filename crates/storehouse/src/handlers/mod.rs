pub mod error;
pub mod health;
pub mod items;
mod query;
pub mod root;
pub mod stores;

pub use error::{fault_barrier, panic_to_fault};
