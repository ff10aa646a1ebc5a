//! Task aggregate root and related lifecycle types.

use super::{ParseTaskStatusError, TaskDomainError, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is in progress and may be edited by its owner.
    Doing,
    /// Task has been completed.
    Done,
    /// Task has been soft-deleted.
    Deleted,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doing => "doing",
            Self::Done => "done",
            Self::Deleted => "deleted",
        }
    }

    /// Returns `true` if no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Returns `true` if title, description, and status may be edited.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Doing)
    }

    /// Returns `true` if a task in this status may move to `target`.
    ///
    /// | from    | doing | done | deleted |
    /// |---------|-------|------|---------|
    /// | doing   | yes   | yes  | yes     |
    /// | done    | no    | no   | yes     |
    /// | deleted | no    | no   | no      |
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::Doing => true,
            Self::Done => matches!(target, Self::Deleted),
            Self::Deleted => false,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Largest title length, in characters, accepted by storage.
    pub const MAX_LENGTH: usize = 256;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is blank or
    /// [`TaskDomainError::TitleTooLong`] when it exceeds
    /// [`TaskTitle::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let length = raw.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TaskDomainError::TitleTooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validated task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A task that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    owner: UserId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Drafts a task owned by `owner` in status [`TaskStatus::Doing`].
    #[must_use]
    pub fn new(
        owner: UserId,
        title: TaskTitle,
        description: TaskDescription,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            owner,
            title,
            description,
            status: TaskStatus::Doing,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the initial update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Attaches the identifier assigned by the store.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task::from_persisted(PersistedTaskData {
            id,
            owner: self.owner,
            title: self.title,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Field replacements requested by an owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    title: Option<TaskTitle>,
    description: Option<TaskDescription>,
    status: Option<TaskStatus>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Moves the task to another status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Checks that `requester` owns this task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotOwner`] for any other user.
    pub fn ensure_owned_by(&self, requester: UserId) -> Result<(), TaskDomainError> {
        if self.owner != requester {
            return Err(TaskDomainError::NotOwner {
                task_id: self.id,
                requester,
            });
        }
        Ok(())
    }

    /// Checks that the task still accepts owner edits.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotEditable`] unless the task is
    /// [`TaskStatus::Doing`].
    pub const fn ensure_editable(&self) -> Result<(), TaskDomainError> {
        if !self.status.is_editable() {
            return Err(TaskDomainError::NotEditable {
                task_id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Applies owner edits.
    ///
    /// Edits are only accepted while the task is [`TaskStatus::Doing`]. A
    /// status change goes through [`TaskStatus::can_transition_to`]. The
    /// update timestamp is refreshed even when `changes` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotEditable`] outside `doing`, or
    /// [`TaskDomainError::InvalidStatusTransition`] when the requested status
    /// is unreachable. The task is left untouched on error.
    pub fn apply_changes(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.ensure_editable()?;
        if let Some(target) = changes.status {
            self.ensure_transition(target)?;
        }

        let TaskChanges {
            title,
            description,
            status,
        } = changes;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(target) = status {
            self.status = target;
        }
        self.touch(clock);
        Ok(())
    }

    /// Soft-deletes the task by moving it to [`TaskStatus::Deleted`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyDeleted`] if the task is already
    /// deleted.
    pub fn soft_delete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.status == TaskStatus::Deleted {
            return Err(TaskDomainError::AlreadyDeleted(self.id));
        }
        self.ensure_transition(TaskStatus::Deleted)?;
        self.status = TaskStatus::Deleted;
        self.touch(clock);
        Ok(())
    }

    fn ensure_transition(&self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
