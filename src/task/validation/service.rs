//! Default task validator.

use crate::task::{
    domain::Task,
    ports::{TaskValidationConfig, TaskValidationResult, TaskValidator},
    validation::rules,
};

/// Default implementation of the task validator.
///
/// # Examples
///
/// ```
/// use tasktrack::task::domain::Task;
/// use tasktrack::task::ports::TaskValidator;
/// use tasktrack::task::validation::{DefaultTaskValidator, TaskValidationError};
/// use mockable::DefaultClock;
///
/// let validator = DefaultTaskValidator::new();
/// assert!(validator.validate(&Task::new("Write docs", &DefaultClock)).is_ok());
/// assert_eq!(
///     validator.validate(&Task::new("ab", &DefaultClock)),
///     Err(TaskValidationError::InvalidTitle { min: 3, max: 255 }),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: TaskValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_config(config: TaskValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active limits.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, task: &Task) -> TaskValidationResult<()> {
        rules::validate_title(task.title(), &self.config)?;
        rules::validate_description(task.description(), &self.config)?;
        rules::validate_completion_percentage(i64::from(task.completion_percentage().value()))
    }
}
