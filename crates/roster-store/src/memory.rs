//! In-memory user repository.

use crate::traits::UserRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{RosterError, RosterResult, User};
use std::collections::HashMap;
use tracing::debug;

/// Process-local user repository backed by a `HashMap`.
///
/// The write lock scope makes [`insert`](UserRepository::insert) a true
/// conditional write: both uniqueness predicates are checked and the record
/// inserted without releasing the lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given users.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.users.write();
            for user in users {
                map.insert(user.user_name.clone(), user);
            }
        }
        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, user_name: &str) -> RosterResult<Option<User>> {
        Ok(self.users.read().get(user_name).cloned())
    }

    async fn insert(&self, user: &User) -> RosterResult<User> {
        let mut users = self.users.write();

        if users.contains_key(&user.user_name) {
            return Err(RosterError::UsernameExists(user.user_name.clone()));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(RosterError::EmailExists(user.email.clone()));
        }

        users.insert(user.user_name.clone(), user.clone());
        debug!("Store: inserted user {}", user.user_name);
        Ok(user.clone())
    }

    async fn update(&self, current_user_name: &str, user: &User) -> RosterResult<User> {
        let mut users = self.users.write();

        if users.remove(current_user_name).is_none() {
            return Err(RosterError::UserNotFound);
        }

        users.insert(user.user_name.clone(), user.clone());
        debug!("Store: updated user {} -> {}", current_user_name, user.user_name);
        Ok(user.clone())
    }

    async fn delete(&self, user_name: &str) -> RosterResult<bool> {
        let removed = self.users.write().remove(user_name).is_some();
        debug!("Store: deleted user {}: {}", user_name, removed);
        Ok(removed)
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository").finish_non_exhaustive()
    }
}
