//! Repository port for task storage and lookup.
//!
//! The repository is the sole owner of task records and their identities.
//! Absence is never an error at this layer: lookups return `None` or an
//! empty list, and updates or deletes aimed at unknown identities do
//! nothing.

use crate::directory::domain::{CategoryId, UserId};
use crate::task::domain::{Priority, Status, Task, TaskId};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Every list-returning method yields a snapshot; order is unspecified.
pub trait TaskRepository: Send + Sync {
    /// Stores a task, assigning the next identity when it has none.
    ///
    /// Saving a task that already has an identity overwrites the stored
    /// record in place. `updated_at` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn save(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns a snapshot of every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks with exactly `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_status(&self, status: Status) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks with exactly `priority`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_priority(&self, priority: Priority) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks assigned to `user`. Unassigned tasks never match.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_assignee(&self, user: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks in `category`. Uncategorized tasks never match.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_category(&self, category: CategoryId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks that are overdue at call time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_overdue(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks due within `start..=end`. Tasks without a due date
    /// never match.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_due_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites a stored task and stamps its `updated_at`.
    ///
    /// This is the only operation that stamps `updated_at`; the stamp is
    /// applied to `task` as well as to the stored record. Does nothing when
    /// `task` has no identity or the identity is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn update(&self, task: &mut Task) -> TaskRepositoryResult<()>;

    /// Removes a task. Does nothing when the identity is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
