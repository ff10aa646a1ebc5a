//! Request payloads accepted by the task service.
//!
//! Payloads arrive already decoded from the wire. Identifiers are opaque
//! masked strings; the service decodes them after field validation.

use crate::task::domain::DEFAULT_PAGE_LIMIT;
use serde::Deserialize;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
}

impl CreateTaskRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Request payload for reading a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetTaskRequest {
    /// Masked task identifier.
    pub id: String,
}

impl GetTaskRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Request payload for listing tasks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListTasksRequest {
    /// Masked identifier of the owner to filter by.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Status name to filter by.
    #[serde(default)]
    pub status: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

const fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl ListTasksRequest {
    /// Creates a request for `page` with the default page size.
    #[must_use]
    pub const fn new(page: u32) -> Self {
        Self {
            user_id: None,
            status: None,
            page,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Filters by owner.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Filters by status name.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload for editing a task.
///
/// Absent and empty fields leave the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// Masked task identifier.
    pub id: String,
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status name.
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request that changes nothing yet.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            status: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status name.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload for soft-deleting a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteTaskRequest {
    /// Masked task identifier.
    pub id: String,
}

impl DeleteTaskRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Returns an optional field only when it is present and non-empty.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
