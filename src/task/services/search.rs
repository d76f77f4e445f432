//! Task queries and multi-criterion search.

use super::{TaskService, TaskServiceResult};
use crate::task::{
    domain::{Priority, Status, Task, TaskSearchFilter},
    ports::{TaskRepository, TaskValidator},
};
use mockable::Clock;
use tracing::debug;

impl<R, C, V> TaskService<R, C, V>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
{
    /// Returns the tasks matching every criterion set on `filter`.
    ///
    /// Starting from all tasks, the result is narrowed by keyword, status,
    /// priority, assignee, category, and finally overdue-only, in that
    /// order. Criteria that are not set are skipped, as is an empty
    /// keyword. The keyword matches title or description as a
    /// case-insensitive substring.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn search_tasks(&self, filter: &TaskSearchFilter) -> TaskServiceResult<Vec<Task>> {
        let mut results = self.repository.find_all()?;

        if let Some(keyword) = filter.keyword().filter(|keyword| !keyword.is_empty()) {
            let needle = keyword.to_lowercase();
            results.retain(|task| task.mentions(&needle));
        }
        if let Some(status) = filter.status() {
            results.retain(|task| task.status() == status);
        }
        if let Some(priority) = filter.priority() {
            results.retain(|task| task.priority() == priority);
        }
        if let Some(assignee) = filter.assignee() {
            results.retain(|task| task.is_assigned_to(assignee));
        }
        if let Some(category) = filter.category() {
            results.retain(|task| task.is_in_category(category));
        }
        if filter.overdue_only() {
            let now = self.clock.utc();
            results.retain(|task| task.is_overdue_at(now));
        }

        debug!(%filter, matches = results.len(), "task search completed");
        Ok(results)
    }

    /// Returns tasks with exactly `status`.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn get_tasks_by_status(&self, status: Status) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_by_status(status)?)
    }

    /// Returns tasks with exactly `priority`.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn get_tasks_by_priority(&self, priority: Priority) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_by_priority(priority)?)
    }

    /// Returns tasks that are overdue now.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn get_overdue_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_overdue()?)
    }
}
