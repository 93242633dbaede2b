//! userstore-file - Flat-file user store.

mod config;
mod store;

pub use config::{DEFAULT_FILE_NAME, StoreConfig};
pub use store::FileUserStore;
