//! Field validation errors for inbound task requests.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::ParseTaskStatusError;
use thiserror::Error;

/// Errors raised by the request validator before any store access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("field '{0}' is required")]
    Required(&'static str),

    /// A text field exceeds its length limit.
    #[error("field '{field}' has {actual} characters, exceeds limit of {max}")]
    TooLong {
        /// Offending field.
        field: &'static str,
        /// Maximum allowed characters.
        max: usize,
        /// Actual number of characters.
        actual: usize,
    },

    /// A numeric field is below its minimum.
    #[error("field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum {
        /// Offending field.
        field: &'static str,
        /// Minimum allowed value.
        min: u32,
        /// Supplied value.
        actual: u32,
    },

    /// A numeric field exceeds its maximum.
    #[error("field '{field}' must be at most {max}, got {actual}")]
    AboveMaximum {
        /// Offending field.
        field: &'static str,
        /// Maximum allowed value.
        max: u32,
        /// Supplied value.
        actual: u32,
    },

    /// A status name is not one of the known statuses.
    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines collected errors, returning `None` when there are none and
    /// the single error unwrapped when there is exactly one.
    #[must_use]
    pub fn from_collected(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns the individual errors, flattening `Multiple`.
    #[must_use]
    pub fn errors(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(inner) => inner.iter().flat_map(Self::errors).collect(),
            other => vec![other],
        }
    }
}

impl From<ParseTaskStatusError> for ValidationError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::UnknownStatus(err.0)
    }
}
