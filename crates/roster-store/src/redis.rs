//! Redis-backed user repository.
//!
//! Each user is stored as a JSON document at `user:{user_name}`; a secondary
//! index at `email:{email}` maps an email back to its owning username so
//! email uniqueness can be claimed with a single-key conditional write.

use crate::traits::UserRepository;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use roster_core::{RosterError, RosterResult, User};
use tracing::debug;

/// Key prefix for user documents.
const USER_KEY_PREFIX: &str = "user:";

/// Key prefix for the email index.
const EMAIL_KEY_PREFIX: &str = "email:";

/// User repository backed by Redis.
pub struct RedisUserRepository {
    pool: Pool,
}

impl RedisUserRepository {
    /// Creates a new repository over the given connection pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> RosterResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(|e| {
            RosterError::storage(format!("Failed to get Redis connection: {}", e))
        })
    }

    fn user_key(user_name: &str) -> String {
        format!("{}{}", USER_KEY_PREFIX, user_name)
    }

    fn email_key(email: &str) -> String {
        format!("{}{}", EMAIL_KEY_PREFIX, email)
    }
}

#[async_trait]
impl UserRepository for RedisUserRepository {
    async fn find_by_username(&self, user_name: &str) -> RosterResult<Option<User>> {
        let mut conn = self.get_conn().await?;

        let payload: Option<String> =
            conn.get(Self::user_key(user_name)).await.map_err(|e| {
                RosterError::storage(format!("Failed to get user '{}': {}", user_name, e))
            })?;

        payload
            .map(|json| serde_json::from_str(&json).map_err(RosterError::from))
            .transpose()
    }

    async fn insert(&self, user: &User) -> RosterResult<User> {
        let payload = serde_json::to_string(user)?;
        let mut conn = self.get_conn().await?;

        // Claim the username key; SET NX is the conditional write.
        let claimed: bool = conn
            .set_nx(Self::user_key(&user.user_name), &payload)
            .await
            .map_err(|e| {
                RosterError::storage(format!("Failed to insert user '{}': {}", user.user_name, e))
            })?;

        if !claimed {
            return Err(RosterError::UsernameExists(user.user_name.clone()));
        }

        // Claim the email index; roll the username key back on failure.
        let email_claimed: bool = conn
            .set_nx(Self::email_key(&user.email), &user.user_name)
            .await
            .map_err(|e| {
                RosterError::storage(format!("Failed to index email '{}': {}", user.email, e))
            })?;

        if !email_claimed {
            let _: i64 = conn
                .del(Self::user_key(&user.user_name))
                .await
                .map_err(|e| {
                    RosterError::storage(format!(
                        "Failed to roll back user '{}': {}",
                        user.user_name, e
                    ))
                })?;
            return Err(RosterError::EmailExists(user.email.clone()));
        }

        debug!("Store: inserted user {}", user.user_name);
        Ok(user.clone())
    }

    async fn update(&self, current_user_name: &str, user: &User) -> RosterResult<User> {
        let existing = self
            .find_by_username(current_user_name)
            .await?
            .ok_or(RosterError::UserNotFound)?;

        let payload = serde_json::to_string(user)?;
        let mut conn = self.get_conn().await?;

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic();
        pipe.set(Self::user_key(&user.user_name), &payload).ignore();
        if current_user_name != user.user_name {
            pipe.del(Self::user_key(current_user_name)).ignore();
        }
        if existing.email != user.email {
            pipe.del(Self::email_key(&existing.email)).ignore();
        }
        pipe.set(Self::email_key(&user.email), &user.user_name)
            .ignore();

        let _: () = pipe.query_async(&mut conn).await.map_err(|e| {
            RosterError::storage(format!("Failed to update user '{}': {}", current_user_name, e))
        })?;

        debug!("Store: updated user {} -> {}", current_user_name, user.user_name);
        Ok(user.clone())
    }

    async fn delete(&self, user_name: &str) -> RosterResult<bool> {
        let Some(existing) = self.find_by_username(user_name).await? else {
            return Ok(false);
        };

        let mut conn = self.get_conn().await?;

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic();
        pipe.del(Self::user_key(user_name)).ignore();
        pipe.del(Self::email_key(&existing.email)).ignore();

        let _: () = pipe.query_async(&mut conn).await.map_err(|e| {
            RosterError::storage(format!("Failed to delete user '{}': {}", user_name, e))
        })?;

        debug!("Store: deleted user {}", user_name);
        Ok(true)
    }
}

impl std::fmt::Debug for RedisUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisUserRepository").finish_non_exhaustive()
    }
}
