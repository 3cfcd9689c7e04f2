mod error;
mod operations;
mod requests;
mod types;

pub use error::{ItemError, StoreError};
pub use operations::{validate_item, validate_store_name};
pub use requests::{CreateItemRequest, CreateStoreRequest, UpdateItemRequest, UpdateStoreRequest};
pub use types::{Item, Store, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
