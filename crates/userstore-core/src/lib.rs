//! userstore-core - Core types and traits for the userstore record service.

pub mod error;
pub mod record;
pub mod traits;
pub mod types;

pub use error::Error;
pub use record::{CreateUser, UpdateUser, User, UserCollection};
pub use traits::UserStore;
pub use types::UserId;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
