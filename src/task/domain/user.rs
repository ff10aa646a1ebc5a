//! Read-only user projection supplied by the user service.

use super::{MaskedId, UserId};

/// Public profile of a user, used to enrich task presentations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleUser {
    id: UserId,
    first_name: String,
    last_name: String,
}

impl SimpleUser {
    /// Creates a user projection.
    #[must_use]
    pub fn new(id: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns the internal user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the opaque external identifier.
    #[must_use]
    pub const fn masked_id(&self) -> MaskedId {
        self.id.masked()
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}
