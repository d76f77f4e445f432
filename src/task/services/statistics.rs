//! Aggregate statistics and due-date windows.

use super::{TaskService, TaskServiceResult};
use crate::task::{
    domain::{Status, Task, add_days},
    ports::{TaskRepository, TaskValidator},
};
use mockable::Clock;
use serde::Serialize;

/// Snapshot of aggregate task figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStatistics {
    /// Number of stored tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks overdue when the snapshot was taken.
    pub overdue: usize,
    /// Percentage of tasks completed, truncated.
    pub completion_rate: u8,
    /// Mean completion percentage, truncated.
    pub average_completion: u8,
}

impl<R, C, V> TaskService<R, C, V>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    V: TaskValidator,
{
    /// Returns the percentage of tasks that are completed, truncated
    /// towards zero. Returns 0 when there are no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn get_completion_rate(&self) -> TaskServiceResult<u8> {
        Ok(completion_rate(&self.repository.find_all()?))
    }

    /// Returns the mean completion percentage across all tasks, truncated
    /// towards zero. Returns 0 when there are no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn get_average_completion_percentage(&self) -> TaskServiceResult<u8> {
        Ok(average_completion(&self.repository.find_all()?))
    }

    /// Returns tasks due between now and `days` days from now, inclusive.
    ///
    /// A negative `days` yields an empty window.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn get_tasks_due_in_next_days(&self, days: i64) -> TaskServiceResult<Vec<Task>> {
        let now = self.clock.utc();
        Ok(self
            .repository
            .find_by_due_date_between(now, add_days(now, days))?)
    }

    /// Computes every aggregate figure from a single snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] on storage failure.
    pub fn statistics(&self) -> TaskServiceResult<TaskStatistics> {
        let tasks = self.repository.find_all()?;
        let now = self.clock.utc();
        Ok(TaskStatistics {
            total: tasks.len(),
            completed: count_completed(&tasks),
            overdue: tasks.iter().filter(|task| task.is_overdue_at(now)).count(),
            completion_rate: completion_rate(&tasks),
            average_completion: average_completion(&tasks),
        })
    }
}

fn count_completed(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|task| task.status() == Status::Completed)
        .count()
}

fn completion_rate(tasks: &[Task]) -> u8 {
    let completed = to_u64(count_completed(tasks));
    truncated_ratio(completed.saturating_mul(100), to_u64(tasks.len()))
}

fn average_completion(tasks: &[Task]) -> u8 {
    let sum = tasks
        .iter()
        .map(|task| u64::from(task.completion_percentage().value()))
        .sum::<u64>();
    truncated_ratio(sum, to_u64(tasks.len()))
}

/// Integer division truncated towards zero; 0 for an empty denominator.
fn truncated_ratio(numerator: u64, denominator: u64) -> u8 {
    numerator
        .checked_div(denominator)
        .and_then(|value| u8::try_from(value).ok())
        .unwrap_or(0)
}

fn to_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
