//! User identifier type.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a user within a collection.
///
/// Identifiers handed out by a store are the decimal rendering of the
/// collection's increment counter (`"1"`, `"2"`, ...). Identifiers coming
/// from callers are taken verbatim: a value that was never allocated is
/// not malformed, it simply is not found.
///
/// # Example
///
/// ```
/// use userstore_core::UserId;
///
/// let id = UserId::from_increment(7);
/// assert_eq!(id.as_str(), "7");
/// assert_eq!(id, UserId::new("7"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier supplied by a caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Render a counter value as an identifier.
    pub fn from_increment(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
