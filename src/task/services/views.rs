//! Serializable results returned by the task service.
//!
//! Views carry only masked identifiers. They are built from domain values
//! at the service boundary and are never persisted.

use crate::task::domain::{MaskedId, SimpleUser, Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public profile of a task owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    /// Masked user identifier.
    pub id: MaskedId,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
}

impl From<&SimpleUser> for UserView {
    fn from(user: &SimpleUser) -> Self {
        Self {
            id: user.masked_id(),
            last_name: user.last_name().to_owned(),
            first_name: user.first_name().to_owned(),
        }
    }
}

/// Presentation of a task, optionally enriched with its owner's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Masked task identifier.
    pub id: MaskedId,
    /// Masked owner identifier.
    pub user_id: MaskedId,
    /// Owner profile, when the user service returned one.
    pub user: Option<UserView>,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskView {
    /// Builds a view of `task`, attaching `owner` when provided.
    #[must_use]
    pub fn new(task: &Task, owner: Option<&SimpleUser>) -> Self {
        Self {
            id: task.id().masked(),
            user_id: task.owner().masked(),
            user: owner.map(UserView::from),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskResponse {
    /// Human-readable acknowledgment.
    pub message: String,
    /// Masked identifier of the new task.
    pub id: MaskedId,
}

/// One page of enriched tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTasksResponse {
    /// Tasks on this page.
    pub items: Vec<TaskView>,
    /// Whether another page follows.
    pub has_next: bool,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Number of matching tasks across all pages.
    pub total: u64,
}

/// Acknowledgment of a successful update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAcknowledgement {
    /// Human-readable acknowledgment.
    pub message: String,
}

impl TaskAcknowledgement {
    /// Creates an acknowledgment.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
