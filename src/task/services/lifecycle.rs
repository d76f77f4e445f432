//! Task creation, update, and lifecycle transitions.

use crate::task::{
    domain::{Priority, Status, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskValidator},
    validation::{DefaultTaskValidator, TaskValidationError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Field validation failed; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// The targeted task does not exist.
    #[error("Task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Business rules layered over a task repository.
///
/// Writes pass through the validator before reaching the repository.
/// Status changes are unconstrained, except that moving a task to
/// [`Status::Completed`] forces its completion percentage to 100.
#[derive(Clone)]
pub struct TaskService<R, C, V = DefaultTaskValidator>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
{
    pub(super) repository: Arc<R>,
    pub(super) clock: Arc<C>,
    validator: V,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a task service using the default validator.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_validator(repository, clock, DefaultTaskValidator::new())
    }
}

impl<R, C, V> TaskService<R, C, V>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
{
    /// Creates a task service using a custom validator.
    #[must_use]
    pub const fn with_validator(repository: Arc<R>, clock: Arc<C>, validator: V) -> Self {
        Self {
            repository,
            clock,
            validator,
        }
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] with the first failing rule,
    /// or [`TaskServiceError::Repository`] on storage failure.
    pub fn create_task(&self, task: Task) -> TaskServiceResult<Task> {
        self.check(&task)?;
        let created = self.repository.save(task)?;
        info!(task_id = ?created.id(), title = created.title(), "task created");
        Ok(created)
    }

    /// Validates and overwrites an existing task.
    ///
    /// Unknown or missing identities are ignored by the repository, so the
    /// task is returned unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] with the first failing rule,
    /// or [`TaskServiceError::Repository`] on storage failure.
    pub fn update_task(&self, mut task: Task) -> TaskServiceResult<Task> {
        self.check(&task)?;
        self.repository.update(&mut task)?;
        debug!(task_id = ?task.id(), "task updated");
        Ok(task)
    }

    /// Changes a task's status.
    ///
    /// Moving to [`Status::Completed`] also sets completion to 100%.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has `id`, or
    /// [`TaskServiceError::Repository`] on storage failure.
    pub fn update_status(&self, id: TaskId, status: Status) -> TaskServiceResult<Task> {
        let mut task = self.require(id)?;
        let previous = task.status();
        task.set_status(status);
        if status == Status::Completed {
            task.set_completion_percentage(100);
        }
        self.repository.update(&mut task)?;
        info!(task_id = %id, from = %previous, to = %status, "task status changed");
        Ok(task)
    }

    /// Changes a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has `id`, or
    /// [`TaskServiceError::Repository`] on storage failure.
    pub fn update_priority(&self, id: TaskId, priority: Priority) -> TaskServiceResult<Task> {
        let mut task = self.require(id)?;
        let previous = task.priority();
        task.set_priority(priority);
        self.repository.update(&mut task)?;
        info!(task_id = %id, from = %previous, to = %priority, "task priority changed");
        Ok(task)
    }

    /// Removes a task. Does nothing when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] on storage failure.
    pub fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id)?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Finds a task by identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] on storage failure.
    pub fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] on storage failure.
    pub fn get_all_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_all()?)
    }

    fn check(&self, task: &Task) -> TaskServiceResult<()> {
        self.validator.validate(task).map_err(|err| {
            warn!(task_id = ?task.id(), reason = %err, "task rejected by validation");
            TaskServiceError::from(err)
        })
    }

    fn require(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository.find_by_id(id)?.ok_or_else(|| {
            warn!(task_id = %id, "task not found");
            TaskServiceError::NotFound(id)
        })
    }
}
