//! In-memory task repository.

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::directory::domain::{CategoryId, UserId};
use crate::task::{
    domain::{Priority, Status, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// All state sits behind one coarse lock, so concurrent callers serialize
/// on every operation. Clones share the same store. Identities start at 1
/// and are never reused, even after deletion.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    last_id: u64,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty repository reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock,
{
    /// Creates an empty repository reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the store lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }

    /// Returns `true` if no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the store lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Full scan returning clones of every task that satisfies `keep`.
    fn scan(&self, keep: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| keep(task))
            .cloned()
            .collect())
    }
}

impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn save(&self, mut task: Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let next = TaskId::new(state.last_id.saturating_add(1));
        let id = task.assign_id(next);
        state.last_id = state.last_id.max(id.value());
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.scan(|_| true)
    }

    fn find_by_status(&self, status: Status) -> TaskRepositoryResult<Vec<Task>> {
        self.scan(|task| task.status() == status)
    }

    fn find_by_priority(&self, priority: Priority) -> TaskRepositoryResult<Vec<Task>> {
        self.scan(|task| task.priority() == priority)
    }

    fn find_by_assignee(&self, user: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.scan(|task| task.is_assigned_to(user))
    }

    fn find_by_category(&self, category: CategoryId) -> TaskRepositoryResult<Vec<Task>> {
        self.scan(|task| task.is_in_category(category))
    }

    fn find_overdue(&self) -> TaskRepositoryResult<Vec<Task>> {
        let now = self.clock.utc();
        self.scan(|task| task.is_overdue_at(now))
    }

    fn find_by_due_date_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.scan(|task| task.due_date().is_some_and(|due| start <= due && due <= end))
    }

    fn update(&self, task: &mut Task) -> TaskRepositoryResult<()> {
        let Some(id) = task.id() else {
            return Ok(());
        };
        let mut state = self.write()?;
        let Some(stored) = state.tasks.get_mut(&id) else {
            return Ok(());
        };
        task.mark_updated(self.clock.utc());
        *stored = task.clone();
        Ok(())
    }

    fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.tasks.remove(&id);
        Ok(())
    }
}
