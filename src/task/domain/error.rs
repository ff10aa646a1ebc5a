//! Error types for task domain validation and lifecycle rules.

use super::{TaskId, TaskStatus, UserId};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Internal identifiers start at one.
    #[error("identifier must be a positive integer")]
    ZeroIdentifier,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the storage limit.
    #[error("task title has {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Maximum allowed characters.
        max: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// Pages are 1-based.
    #[error("page must be at least 1, got {0}")]
    InvalidPage(u32),

    /// Page size must be positive.
    #[error("limit must be at least 1, got {0}")]
    InvalidLimit(u32),

    /// Only the owning user may mutate a task.
    #[error("only the owner can modify task {task_id} (requested by {requester})")]
    NotOwner {
        /// Task being mutated.
        task_id: TaskId,
        /// User attempting the mutation.
        requester: UserId,
    },

    /// Field updates are only accepted while the task is `doing`.
    #[error("task {task_id} cannot be updated in status {status}")]
    NotEditable {
        /// Task being mutated.
        task_id: TaskId,
        /// Current status.
        status: TaskStatus,
    },

    /// The task has already been soft-deleted.
    #[error("task {0} has already been deleted")]
    AlreadyDeleted(TaskId),

    /// The requested status change is not permitted.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Task being mutated.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

impl TaskDomainError {
    /// Returns `true` when the error denies a mutation rather than rejecting
    /// malformed input.
    #[must_use]
    pub const fn is_authorization_failure(&self) -> bool {
        matches!(
            self,
            Self::NotOwner { .. }
                | Self::NotEditable { .. }
                | Self::AlreadyDeleted(_)
                | Self::InvalidStatusTransition { .. }
        )
    }
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
