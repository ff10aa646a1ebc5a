//! Authenticated caller identity.

use crate::task::domain::{MaskedIdError, UserId};

/// The user on whose behalf a service operation runs.
///
/// The transport builds a requester from the subject returned by token
/// introspection and passes it explicitly to every service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requester {
    user_id: UserId,
}

impl Requester {
    /// Creates a requester for a known user.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// Creates a requester from a masked token subject.
    ///
    /// # Errors
    ///
    /// Returns [`MaskedIdError`] when the subject is not a masked user
    /// identifier.
    pub fn from_subject(subject: &str) -> Result<Self, MaskedIdError> {
        UserId::from_masked(subject).map(Self::new)
    }

    /// Returns the caller's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}
