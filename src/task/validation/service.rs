//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskRequestValidator` port,
//! combining individual validation rules per request type.

use crate::task::{
    error::ValidationError,
    ports::validator::{TaskRequestValidator, ValidationConfig, ValidationResult},
    services::{
        CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest, UpdateTaskRequest,
    },
    validation::rules,
};

/// Default implementation of the request validator.
///
/// Applies all rules for a request, collecting errors to provide
/// comprehensive feedback rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use tasktrack::task::ports::validator::TaskRequestValidator;
/// use tasktrack::task::services::CreateTaskRequest;
/// use tasktrack::task::validation::DefaultTaskRequestValidator;
///
/// let validator = DefaultTaskRequestValidator::new();
/// assert!(validator.validate_create(&CreateTaskRequest::new("A", "d")).is_ok());
/// assert!(validator.validate_create(&CreateTaskRequest::new("", "")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskRequestValidator {
    config: ValidationConfig,
}

impl DefaultTaskRequestValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl TaskRequestValidator for DefaultTaskRequestValidator {
    fn validate_create(&self, request: &CreateTaskRequest) -> ValidationResult<()> {
        collect([
            rules::validate_title(&request.title, &self.config),
            rules::validate_description(&request.description),
        ])
    }

    fn validate_get(&self, request: &GetTaskRequest) -> ValidationResult<()> {
        rules::validate_required_id("id", &request.id)
    }

    fn validate_list(&self, request: &ListTasksRequest) -> ValidationResult<()> {
        collect([
            rules::validate_page(request.page),
            rules::validate_limit(request.limit, &self.config),
            rules::validate_status_name(request.status.as_deref()),
        ])
    }

    fn validate_update(&self, request: &UpdateTaskRequest) -> ValidationResult<()> {
        collect([
            rules::validate_required_id("id", &request.id),
            rules::validate_optional_title(request.title.as_deref(), &self.config),
            rules::validate_optional_description(request.description.as_deref()),
            rules::validate_status_name(request.status.as_deref()),
        ])
    }

    fn validate_delete(&self, request: &DeleteTaskRequest) -> ValidationResult<()> {
        rules::validate_required_id("id", &request.id)
    }
}

/// Gathers rule outcomes into a single result.
fn collect<const N: usize>(outcomes: [ValidationResult<()>; N]) -> ValidationResult<()> {
    let errors = outcomes.into_iter().filter_map(Result::err).collect();
    ValidationError::from_collected(errors).map_or(Ok(()), Err)
}

// Note: Unit tests for DefaultTaskRequestValidator are located in
// src/task/tests/validation_tests.rs.
