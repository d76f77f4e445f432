//! Validator port for task field checks.

use crate::task::{domain::Task, validation::TaskValidationError};

/// Result type for validation operations.
pub type TaskValidationResult<T> = Result<T, TaskValidationError>;

/// Port for task validation.
///
/// Rules run in a fixed order (presence, title, description, completion
/// percentage) and stop at the first failure, so at most one error is
/// reported per call. Implementations must be stateless apart from their
/// configuration.
pub trait TaskValidator: Send + Sync {
    /// Validates every field of `task`.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`TaskValidationError`].
    fn validate(&self, task: &Task) -> TaskValidationResult<()>;

    /// Returns the first failing rule for an optional task, or `None` when
    /// the task is present and valid.
    fn validation_error(&self, task: Option<&Task>) -> Option<TaskValidationError> {
        match task {
            Some(task) => self.validate(task).err(),
            None => Some(TaskValidationError::MissingTask),
        }
    }

    /// Returns `true` when `task` is present and passes every rule.
    fn is_valid(&self, task: Option<&Task>) -> bool {
        self.validation_error(task).is_none()
    }
}

/// Field limits applied by the validator.
///
/// # Examples
///
/// ```
/// use tasktrack::task::ports::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.min_title_length, 3);
/// assert_eq!(config.max_title_length, 255);
/// assert_eq!(config.max_description_length, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Minimum title length in characters, after trimming.
    pub min_title_length: usize,
    /// Maximum title length in characters, after trimming.
    pub max_title_length: usize,
    /// Maximum description length in characters, untrimmed.
    pub max_description_length: usize,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            min_title_length: 3,
            max_title_length: 255,
            max_description_length: 2000,
        }
    }
}
