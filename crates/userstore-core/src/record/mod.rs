//! User records and the collection that holds them.
//!
//! The collection is a plain in-memory value: stores load it, apply one
//! mutation through the methods here, and write it back. Nothing in this
//! module touches the filesystem.

mod collection;
mod request;
mod user;

pub use collection::UserCollection;
pub use request::{CreateUser, UpdateUser};
pub use user::User;
