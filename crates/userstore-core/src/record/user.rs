//! A single user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// When the user was created. Never changes afterwards.
    pub created_at: DateTime<Utc>,

    /// Name shown for the user.
    pub display_name: String,

    /// Contact address recorded at creation.
    pub email: String,
}

impl User {
    /// Create a user stamped with the current time.
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_created_at(display_name, email, Utc::now())
    }

    /// Create a user with an explicit creation time.
    pub fn with_created_at(
        display_name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            created_at,
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}
