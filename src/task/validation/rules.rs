//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one field. Rules return `Ok(())` on
//! success or a specific `ValidationError` on failure.

use crate::task::{
    domain::TaskStatus, error::ValidationError, ports::validator::ValidationConfig,
    services::present,
};

/// Validates that an identifier field is supplied.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the value is blank.
pub fn validate_required_id(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Validates a required title.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the title is blank or
/// `ValidationError::TooLong` if it exceeds the configured length.
pub fn validate_title(value: &str, config: &ValidationConfig) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required("title"));
    }
    let max = config.effective_title_length();
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: "title",
            max,
            actual,
        });
    }
    Ok(())
}

/// Validates a replacement title; an absent or empty value is ignored.
///
/// # Errors
///
/// Returns the errors of [`validate_title`] for a supplied title.
pub fn validate_optional_title(
    value: Option<&str>,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    present(value).map_or(Ok(()), |title| validate_title(title, config))
}

/// Validates a required description.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the description is blank.
pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required("description"));
    }
    Ok(())
}

/// Validates a replacement description; an absent or empty value is ignored.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the description is whitespace
/// only.
pub fn validate_optional_description(value: Option<&str>) -> Result<(), ValidationError> {
    present(value).map_or(Ok(()), validate_description)
}

/// Validates a status name; an absent or empty value is ignored.
///
/// # Errors
///
/// Returns `ValidationError::UnknownStatus` for unrecognized names.
pub fn validate_status_name(value: Option<&str>) -> Result<(), ValidationError> {
    present(value).map_or(Ok(()), |name| {
        TaskStatus::try_from(name)
            .map(|_| ())
            .map_err(ValidationError::from)
    })
}

/// Validates a 1-based page number.
///
/// # Errors
///
/// Returns `ValidationError::BelowMinimum` for zero.
pub const fn validate_page(page: u32) -> Result<(), ValidationError> {
    if page == 0 {
        return Err(ValidationError::BelowMinimum {
            field: "page",
            min: 1,
            actual: page,
        });
    }
    Ok(())
}

/// Validates a page size against the configured bounds.
///
/// # Errors
///
/// Returns `ValidationError::BelowMinimum` for zero or
/// `ValidationError::AboveMaximum` when a configured cap is exceeded.
pub fn validate_limit(limit: u32, config: &ValidationConfig) -> Result<(), ValidationError> {
    if limit == 0 {
        return Err(ValidationError::BelowMinimum {
            field: "limit",
            min: 1,
            actual: limit,
        });
    }
    match config.max_page_limit {
        Some(max) if limit > max => Err(ValidationError::AboveMaximum {
            field: "limit",
            max,
            actual: limit,
        }),
        _ => Ok(()),
    }
}
