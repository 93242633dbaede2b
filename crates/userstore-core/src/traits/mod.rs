//! Core traits for user storage.

mod store;

pub use store::UserStore;
