//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use roster_core::RosterResult;

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user with a unique username and email.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse>;

    /// Gets a user by username.
    async fn get_user(&self, user_name: &str) -> RosterResult<UserResponse>;

    /// Applies a partial update to the user currently named
    /// `current_user_name`.
    async fn update_user(
        &self,
        current_user_name: &str,
        request: UpdateUserRequest,
    ) -> RosterResult<UserResponse>;

    /// Deletes a user by username.
    async fn delete_user(&self, user_name: &str) -> RosterResult<()>;
}
