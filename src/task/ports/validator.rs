//! Validator port for inbound task requests.
//!
//! Defines the abstract interface applied to every request before the
//! service touches the store.

use crate::task::{
    domain::TaskTitle,
    error::ValidationError,
    services::{
        CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest, UpdateTaskRequest,
    },
};
use serde::Deserialize;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for field-level request validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::from_collected` to combine errors
/// - Be stateless and thread-safe
pub trait TaskRequestValidator: Send + Sync {
    /// Validates a create request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the title or description is invalid.
    fn validate_create(&self, request: &CreateTaskRequest) -> ValidationResult<()>;

    /// Validates a get request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the identifier is missing.
    fn validate_get(&self, request: &GetTaskRequest) -> ValidationResult<()>;

    /// Validates a list request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if paging values are out of range or the
    /// status filter is unknown.
    fn validate_list(&self, request: &ListTasksRequest) -> ValidationResult<()>;

    /// Validates an update request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the identifier is missing or a supplied
    /// replacement is invalid.
    fn validate_update(&self, request: &UpdateTaskRequest) -> ValidationResult<()>;

    /// Validates a delete request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the identifier is missing.
    fn validate_delete(&self, request: &DeleteTaskRequest) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use tasktrack::task::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_title_length, 256);
/// assert!(config.max_page_limit.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum title length in characters. Values above the storage limit
    /// are clamped to it.
    pub max_title_length: usize,
    /// Optional upper bound on the page size.
    pub max_page_limit: Option<u32>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: TaskTitle::MAX_LENGTH,
            max_page_limit: None,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that caps page sizes.
    #[must_use]
    pub fn with_max_page_limit(max_page_limit: u32) -> Self {
        Self {
            max_page_limit: Some(max_page_limit),
            ..Self::default()
        }
    }

    /// Returns the title limit actually enforced.
    #[must_use]
    pub fn effective_title_length(&self) -> usize {
        self.max_title_length.min(TaskTitle::MAX_LENGTH)
    }
}
