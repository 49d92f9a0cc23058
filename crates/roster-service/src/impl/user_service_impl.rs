//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{RosterError, RosterResult, User};
use roster_store::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service implementation over a [`UserRepository`].
pub struct UserServiceImpl<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        debug!("Creating user: {}", request.user_name);

        if request.user_name.trim().is_empty() {
            return Err(RosterError::EmptyUsername);
        }
        if request.email.trim().is_empty() {
            return Err(RosterError::EmptyEmail);
        }

        let user = User::new(
            request.user_name,
            request.email,
            request.display_name.filter(|d| !d.trim().is_empty()),
        );

        // Uniqueness is enforced by the store's conditional write.
        let saved_user = self.repository.insert(&user).await?;

        info!("User created: {}", saved_user.user_name);
        Ok(UserResponse::from(saved_user))
    }

    async fn get_user(&self, user_name: &str) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", user_name);

        let user = self
            .repository
            .find_by_username(user_name)
            .await?
            .ok_or(RosterError::UserNotFound)?;

        Ok(UserResponse::from(user))
    }

    async fn update_user(
        &self,
        current_user_name: &str,
        request: UpdateUserRequest,
    ) -> RosterResult<UserResponse> {
        debug!("Updating user: {}", current_user_name);

        let mut user = self
            .repository
            .find_by_username(current_user_name)
            .await?
            .ok_or(RosterError::UserNotFound)?;

        if request.is_empty() {
            debug!("Update request carries no fields, nothing to persist");
            return Ok(UserResponse::from(user));
        }

        if let Some(user_name) = request.user_name {
            if user_name.trim().is_empty() {
                return Err(RosterError::EmptyUsername);
            }
            user.user_name = user_name;
        }

        if let Some(email) = request.email {
            if email.trim().is_empty() {
                return Err(RosterError::EmptyEmail);
            }
            user.email = email;
        }

        if let Some(display_name) = request.display_name {
            // Explicit empty string clears the field.
            user.display_name = if display_name.trim().is_empty() {
                None
            } else {
                Some(display_name)
            };
        }

        let updated_user = self.repository.update(current_user_name, &user).await?;

        info!("User updated: {} -> {}", current_user_name, updated_user.user_name);
        Ok(UserResponse::from(updated_user))
    }

    async fn delete_user(&self, user_name: &str) -> RosterResult<()> {
        debug!("Deleting user: {}", user_name);

        let deleted = self.repository.delete(user_name).await?;

        if !deleted {
            return Err(RosterError::UserNotFound);
        }

        info!("User deleted: {}", user_name);
        Ok(())
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
