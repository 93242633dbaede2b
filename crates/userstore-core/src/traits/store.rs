//! User store trait.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::Result;
use crate::record::{CreateUser, UpdateUser, User};
use crate::types::UserId;

/// Durable storage for user records.
///
/// Each call is one complete cycle against durable state: load, answer or
/// mutate, and write back when something changed. Implementations keep no
/// collection state between calls.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every user keyed by identifier.
    async fn list(&self) -> Result<BTreeMap<UserId, User>>;

    /// Create a user and return its newly allocated identifier.
    async fn create(&self, request: CreateUser) -> Result<UserId>;

    /// Fetch a single user.
    async fn get(&self, id: &UserId) -> Result<User>;

    /// Replace the display name of an existing user.
    async fn update(&self, id: &UserId, request: UpdateUser) -> Result<()>;

    /// Remove a user.
    async fn delete(&self, id: &UserId) -> Result<()>;
}
