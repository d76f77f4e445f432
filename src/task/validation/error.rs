//! Validation error type.

use thiserror::Error;

/// Reason a task failed validation.
///
/// The display strings are the user-facing messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// No task was supplied.
    #[error("Task cannot be null")]
    MissingTask,

    /// The trimmed title length is outside the allowed range.
    #[error("Title must be between {min} and {max} characters")]
    InvalidTitle {
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// The description is longer than allowed.
    #[error("Description cannot exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum allowed length.
        max: usize,
    },

    /// The completion percentage is outside `0..=100`.
    #[error("Completion percentage must be between 0 and 100")]
    InvalidCompletionPercentage,
}
