//! The persisted aggregate of all users.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AllocError;
use crate::types::UserId;
use crate::{Error, Result};

use super::User;

/// Every user plus the counter that names new ones.
///
/// `increment` only ever grows: each allocation bumps it once and the
/// new value becomes the identifier, so a deleted identifier is never
/// handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCollection {
    increment: u64,

    #[serde(rename = "list")]
    users: BTreeMap<UserId, User>,
}

impl UserCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last counter value handed out (0 for a fresh collection).
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Consume the collection, keeping only the users.
    pub fn into_users(self) -> BTreeMap<UserId, User> {
        self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Advance the counter and return the identifier it now names.
    ///
    /// Fails without touching the counter when it cannot advance or when
    /// the identifier it would name is already stored.
    pub fn allocate_id(&mut self) -> Result<UserId> {
        let next = self
            .increment
            .checked_add(1)
            .ok_or(AllocError::CounterExhausted {
                increment: self.increment,
            })?;

        let id = UserId::from_increment(next);
        if self.users.contains_key(&id) {
            return Err(AllocError::InUse { id }.into());
        }

        self.increment = next;
        Ok(id)
    }

    /// Look up a user.
    pub fn get(&self, id: &UserId) -> Result<&User> {
        self.users.get(id).ok_or_else(|| Error::not_found(id.clone()))
    }

    /// Insert a user under `id`, returning any user it replaced.
    pub fn insert(&mut self, id: UserId, user: User) -> Option<User> {
        self.users.insert(id, user)
    }

    /// Replace the display name of an existing user.
    ///
    /// `created_at` and `email` are left alone. The collection is not
    /// touched when `id` is absent.
    pub fn rename(&mut self, id: &UserId, display_name: impl Into<String>) -> Result<&User> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::not_found(id.clone()))?;
        user.display_name = display_name.into();
        Ok(user)
    }

    /// Remove a user, returning it.
    pub fn remove(&mut self, id: &UserId) -> Result<User> {
        self.users
            .remove(id)
            .ok_or_else(|| Error::not_found(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn allocates_sequential_ids() {
        let mut collection = UserCollection::new();
        let ids: Vec<_> = (0..3).map(|_| collection.allocate_id().unwrap()).collect();

        assert_eq!(ids, vec![UserId::new("1"), UserId::new("2"), UserId::new("3")]);
        assert_eq!(collection.increment(), 3);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut collection = UserCollection::new();
        let id = collection.allocate_id().unwrap();
        collection.insert(id.clone(), User::new("Alice", "a@x.com"));
        collection.remove(&id).unwrap();

        assert_eq!(collection.allocate_id().unwrap().as_str(), "2");
    }

    #[test]
    fn rename_keeps_other_fields() {
        let mut collection = UserCollection::new();
        let id = collection.allocate_id().unwrap();
        let original = User::new("Alice", "a@x.com");
        collection.insert(id.clone(), original.clone());

        let renamed = collection.rename(&id, "Alicia").unwrap().clone();

        assert_eq!(renamed.display_name, "Alicia");
        assert_eq!(renamed.email, original.email);
        assert_eq!(renamed.created_at, original.created_at);
    }

    #[test]
    fn missing_id_leaves_collection_unchanged() {
        let mut collection = UserCollection::new();
        let id = collection.allocate_id().unwrap();
        collection.insert(id, User::new("Alice", "a@x.com"));
        let before = collection.clone();

        let missing = UserId::new("2");
        assert!(collection.get(&missing).unwrap_err().is_not_found());
        assert!(collection.rename(&missing, "Bob").unwrap_err().is_not_found());
        assert!(collection.remove(&missing).unwrap_err().is_not_found());
        assert_eq!(collection, before);
    }

    #[test]
    fn exhausted_counter_is_an_error() {
        let mut collection: UserCollection =
            serde_json::from_value(json!({ "increment": u64::MAX })).unwrap();
        let before = collection.clone();

        let err = collection.allocate_id().unwrap_err();
        assert!(matches!(
            err,
            Error::Allocation(AllocError::CounterExhausted { increment: u64::MAX })
        ));
        assert_eq!(collection, before);
    }

    #[test]
    fn stored_id_ahead_of_counter_is_not_overwritten() {
        let mut collection: UserCollection = serde_json::from_value(json!({
            "increment": 0,
            "list": {
                "1": {
                    "created_at": "2024-01-01T00:00:00Z",
                    "display_name": "Old",
                    "email": "old@x.com"
                }
            }
        }))
        .unwrap();
        let before = collection.clone();

        let err = collection.allocate_id().unwrap_err();
        assert!(matches!(err, Error::Allocation(AllocError::InUse { ref id }) if id.as_str() == "1"));
        assert_eq!(collection, before);
        assert_eq!(collection.get(&UserId::new("1")).unwrap().display_name, "Old");
    }

    #[test]
    fn serialized_layout() {
        let value = serde_json::to_value(UserCollection::new()).unwrap();
        assert_eq!(value, json!({ "increment": 0, "list": {} }));
    }

    #[test]
    fn absent_keys_default() {
        let collection: UserCollection = serde_json::from_str("{}").unwrap();
        assert_eq!(collection, UserCollection::new());

        let collection: UserCollection = serde_json::from_str(r#"{"increment": 4}"#).unwrap();
        assert_eq!(collection.increment(), 4);
        assert!(collection.is_empty());
    }
}
