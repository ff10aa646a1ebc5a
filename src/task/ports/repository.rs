//! Repository port for task persistence, lookup, and paged listing.

use crate::task::domain::{NewTask, PageRequest, Task, TaskId, TaskStatus, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Criteria applied to task listings in addition to the implicit exclusion
/// of deleted tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Restrict to tasks owned by this user.
    pub owner: Option<UserId>,
    /// Restrict to tasks in this status.
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Creates a filter matching every non-deleted task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to one owner.
    #[must_use]
    pub const fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Restricts the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` if `task` satisfies the filter, including the deleted
    /// exclusion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.status() != TaskStatus::Deleted
            && self.owner.is_none_or(|owner| task.owner() == owner)
            && self.status.is_none_or(|status| task.status() == status)
    }
}

/// One page of tasks together with the number of matching rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPage {
    /// Tasks on the requested page, newest identifier first.
    pub items: Vec<Task>,
    /// Number of tasks matching the filter across all pages.
    pub total: u64,
}

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the insert.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Persists title, description, status, and update timestamp of an
    /// existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Marks a task as deleted without removing its row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn soft_delete(&self, id: TaskId, deleted_at: DateTime<Utc>)
    -> TaskRepositoryResult<()>;

    /// Finds a task by identifier, whatever its status.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns one page of non-deleted tasks matching `filter`, ordered by
    /// identifier descending, with the total number of matches.
    async fn find_page(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
