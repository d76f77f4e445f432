//! Individual validation rule implementations.
//!
//! Each rule is a pure function. The `is_valid_*` forms answer yes or no;
//! the `validate_*` forms return the matching [`TaskValidationError`].

use crate::task::{ports::TaskValidationConfig, validation::TaskValidationError};

/// Returns `true` when the trimmed title length is within the configured
/// range.
#[must_use]
pub fn is_valid_title(title: &str, config: &TaskValidationConfig) -> bool {
    let length = title.trim().chars().count();
    (config.min_title_length..=config.max_title_length).contains(&length)
}

/// Returns `true` when the description is absent or within the configured
/// length. The description is measured untrimmed.
#[must_use]
pub fn is_valid_description(description: Option<&str>, config: &TaskValidationConfig) -> bool {
    description.is_none_or(|text| text.chars().count() <= config.max_description_length)
}

/// Returns `true` when `value` lies within `0..=100`.
#[must_use]
pub fn is_valid_completion_percentage(value: i64) -> bool {
    (0..=100).contains(&value)
}

/// Validates a title.
///
/// # Errors
///
/// Returns [`TaskValidationError::InvalidTitle`] when the trimmed length is
/// out of range.
pub fn validate_title(
    title: &str,
    config: &TaskValidationConfig,
) -> Result<(), TaskValidationError> {
    if is_valid_title(title, config) {
        return Ok(());
    }
    Err(TaskValidationError::InvalidTitle {
        min: config.min_title_length,
        max: config.max_title_length,
    })
}

/// Validates an optional description.
///
/// # Errors
///
/// Returns [`TaskValidationError::DescriptionTooLong`] when the description
/// exceeds the configured limit.
pub fn validate_description(
    description: Option<&str>,
    config: &TaskValidationConfig,
) -> Result<(), TaskValidationError> {
    if is_valid_description(description, config) {
        return Ok(());
    }
    Err(TaskValidationError::DescriptionTooLong {
        max: config.max_description_length,
    })
}

/// Validates a raw completion percentage.
///
/// # Errors
///
/// Returns [`TaskValidationError::InvalidCompletionPercentage`] when the
/// value is outside `0..=100`.
pub fn validate_completion_percentage(value: i64) -> Result<(), TaskValidationError> {
    if is_valid_completion_percentage(value) {
        return Ok(());
    }
    Err(TaskValidationError::InvalidCompletionPercentage)
}
