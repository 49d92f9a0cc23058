//! User entity.

use serde::{Deserialize, Serialize};

/// User account record.
///
/// `user_name` doubles as the record's primary key in the entity store;
/// both `user_name` and `email` are unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username, primary key.
    pub user_name: String,

    /// Unique email address.
    pub email: String,

    /// Optional display name.
    pub display_name: Option<String>,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            display_name,
        }
    }

}
