//! Identifier types for the task domain.
//!
//! Both identifiers wrap the store-assigned sequential key. Their `Display`
//! implementations render the masked form so that log lines and error
//! messages never reveal the raw key, and neither type implements
//! `Serialize`.

use super::{EntityKind, MaskedId, MaskedIdError, TaskDomainError};
use std::fmt;
use std::num::NonZeroU32;

/// Store-assigned identifier of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(NonZeroU32);

impl TaskId {
    /// Creates a task identifier from a non-zero key.
    #[must_use]
    pub const fn new(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Creates a task identifier from a raw key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ZeroIdentifier`] when `raw` is zero.
    pub const fn from_raw(raw: u32) -> Result<Self, TaskDomainError> {
        match NonZeroU32::new(raw) {
            Some(value) => Ok(Self(value)),
            None => Err(TaskDomainError::ZeroIdentifier),
        }
    }

    /// Decodes a masked task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MaskedIdError`] when the value is not a canonical masked
    /// identifier of a task.
    pub fn from_masked(value: &str) -> Result<Self, MaskedIdError> {
        MaskedId::parse_as(value, EntityKind::Task).map(|masked| Self(masked.local_id()))
    }

    /// Returns the opaque external identifier.
    #[must_use]
    pub const fn masked(self) -> MaskedId {
        MaskedId::new(self.0, EntityKind::Task)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// Identifier of a user owned by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(NonZeroU32);

impl UserId {
    /// Creates a user identifier from a non-zero key.
    #[must_use]
    pub const fn new(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Creates a user identifier from a raw key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ZeroIdentifier`] when `raw` is zero.
    pub const fn from_raw(raw: u32) -> Result<Self, TaskDomainError> {
        match NonZeroU32::new(raw) {
            Some(value) => Ok(Self(value)),
            None => Err(TaskDomainError::ZeroIdentifier),
        }
    }

    /// Decodes a masked user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MaskedIdError`] when the value is not a canonical masked
    /// identifier of a user.
    pub fn from_masked(value: &str) -> Result<Self, MaskedIdError> {
        MaskedId::parse_as(value, EntityKind::User).map(|masked| Self(masked.local_id()))
    }

    /// Returns the opaque external identifier.
    #[must_use]
    pub const fn masked(self) -> MaskedId {
        MaskedId::new(self.0, EntityKind::User)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
