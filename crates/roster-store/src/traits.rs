//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{RosterResult, User};

/// User repository trait.
///
/// The seam to the external entity store. Implementations must provide
/// exact-match lookup on the primary key and atomic single-record writes.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by username (exact-match lookup on the primary key).
    async fn find_by_username(&self, user_name: &str) -> RosterResult<Option<User>>;

    /// Inserts a new user record.
    ///
    /// This is a conditional write: it fails with
    /// [`RosterError::UsernameExists`] if the username key is already taken,
    /// or [`RosterError::EmailExists`] if the email is registered to another
    /// user. The check and the write happen atomically.
    ///
    /// [`RosterError::UsernameExists`]: roster_core::RosterError::UsernameExists
    /// [`RosterError::EmailExists`]: roster_core::RosterError::EmailExists
    async fn insert(&self, user: &User) -> RosterResult<User>;

    /// Overwrites the record currently keyed by `current_user_name`.
    ///
    /// If the record's `user_name` changed, the record is re-keyed: the new
    /// key is written and the old key removed. No uniqueness check is
    /// performed; a colliding rename resolves to whatever the store's
    /// key-collision behavior yields (last write wins).
    async fn update(&self, current_user_name: &str, user: &User) -> RosterResult<User>;

    /// Deletes a user by username. Returns whether a record was removed.
    async fn delete(&self, user_name: &str) -> RosterResult<bool>;
}
