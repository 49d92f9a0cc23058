//! User-related DTOs.

use roster_core::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Unique username; becomes the record's primary key.
    pub user_name: String,

    /// Unique email address.
    pub email: String,

    /// Optional display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Request to update an existing user.
///
/// Every field is a presence marker: an absent field leaves the stored value
/// unchanged, a present field overwrites it. An empty `display_name` clears
/// the field; an empty `user_name` or `email` is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New username, if renaming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New display name; empty string clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UpdateUserRequest {
    /// Checks whether the request carries any field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.email.is_none() && self.display_name.is_none()
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_name: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_name: user.user_name,
            email: user.email,
            display_name: user.display_name,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_from_user() {
        let user = User::new("alice", "alice@example.com", Some("Alice".to_string()));
        let response: UserResponse = user.clone().into();

        assert_eq!(response.user_name, user.user_name);
        assert_eq!(response.email, user.email);
        assert_eq!(response.display_name, user.display_name);
    }

    #[test]
    fn test_user_response_from_user_ref() {
        let user = User::new("bob", "bob@example.com", None);
        let response: UserResponse = (&user).into();

        assert_eq!(response.user_name, "bob");
        assert!(response.display_name.is_none());
    }

    #[test]
    fn test_update_request_absent_fields_deserialize_as_none() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"display_name":"New Name"}"#).unwrap();

        assert!(request.user_name.is_none());
        assert!(request.email.is_none());
        assert_eq!(request.display_name, Some("New Name".to_string()));
    }

    #[test]
    fn test_update_request_is_empty() {
        let request = UpdateUserRequest::default();
        assert!(request.is_empty());

        let request = UpdateUserRequest {
            email: Some("new@example.com".to_string()),
            ..UpdateUserRequest::default()
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_create_request_serialization() {
        let request = CreateUserRequest {
            user_name: "carol".to_string(),
            email: "carol@example.com".to_string(),
            display_name: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        let parsed: CreateUserRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.user_name, request.user_name);
        assert_eq!(parsed.email, request.email);
    }

    #[test]
    fn test_create_request_display_name_defaults_to_none() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"user_name":"dave","email":"dave@example.com"}"#).unwrap();
        assert!(request.display_name.is_none());
    }
}
