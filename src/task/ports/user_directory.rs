//! Lookup port for user profiles owned by the user service.

use crate::task::domain::{SimpleUser, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Read-only access to user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches the profiles of every known user in `ids`.
    ///
    /// Unknown identifiers are skipped rather than reported; the result may
    /// be shorter than `ids` and is not guaranteed to follow its order.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Lookup`] when the user service fails.
    async fn find_by_ids(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<SimpleUser>>;

    /// Fetches a single profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] for unknown users or
    /// [`UserDirectoryError::Lookup`] when the user service fails.
    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<SimpleUser>;
}

/// Errors returned by user directory adapters.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// The user service does not know this user.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Transport or service failure.
    #[error("user lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a lookup failure from the adapter.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
