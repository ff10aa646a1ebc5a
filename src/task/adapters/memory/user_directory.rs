//! In-memory user directory standing in for the user service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{SimpleUser, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, SimpleUser>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = SimpleUser>) -> Self {
        let index = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            users: Arc::new(RwLock::new(index)),
        }
    }

    /// Adds or replaces a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Lookup`] if the directory lock is
    /// poisoned.
    pub fn insert(&self, user: SimpleUser) -> UserDirectoryResult<()> {
        let mut users = self.users.write().map_err(lock_error)?;
        users.insert(user.id(), user);
        Ok(())
    }
}

fn lock_error(err: impl ToString) -> UserDirectoryError {
    UserDirectoryError::lookup(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_ids(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<SimpleUser>> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<SimpleUser> {
        let users = self.users.read().map_err(lock_error)?;
        users.get(&id).cloned().ok_or(UserDirectoryError::NotFound(id))
    }
}
