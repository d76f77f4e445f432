//! Task entity and its self-contained invariants.

use super::{CompletionPercentage, Priority, Status, TaskId};
use crate::directory::domain::{CategoryId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of trackable work.
///
/// A task starts without an identity; the repository assigns one on first
/// save. Assignee and category are held as identities and resolved through
/// the directory repositories when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: Option<String>,
    status: Status,
    priority: Priority,
    assignee: Option<UserId>,
    category: Option<CategoryId>,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    completion: CompletionPercentage,
}

impl Task {
    /// Creates a pending, medium-priority task stamped with the clock's
    /// current time.
    #[must_use]
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            status: Status::default(),
            priority: Priority::default(),
            assignee: None,
            category: None,
            created_at: clock.utc(),
            due_date: None,
            updated_at: None,
            completion: CompletionPercentage::ZERO,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the completion percentage, clamping it into `0..=100`.
    #[must_use]
    pub fn with_completion_percentage(mut self, value: i64) -> Self {
        self.set_completion_percentage(value);
        self
    }

    /// Returns the identity, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assignee identity, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the category identity, if any.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the latest update timestamp, or `None` if never updated.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn completion_percentage(&self) -> CompletionPercentage {
        self.completion
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces or clears the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replaces the status.
    pub const fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Replaces the priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replaces or clears the assignee.
    pub const fn set_assignee(&mut self, assignee: Option<UserId>) {
        self.assignee = assignee;
    }

    /// Replaces or clears the category.
    pub const fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    /// Replaces or clears the due date.
    pub const fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    /// Sets the completion percentage.
    ///
    /// Out-of-range values are clamped into `0..=100`, never rejected.
    pub fn set_completion_percentage(&mut self, value: i64) {
        self.completion = CompletionPercentage::clamped(value);
    }

    /// Returns whether the task is overdue at `now`.
    ///
    /// A task is overdue when it has a due date, is not completed, and `now`
    /// is strictly after the due date.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        if self.status == Status::Completed {
            return false;
        }
        self.due_date.is_some_and(|due| now > due)
    }

    /// Returns whether the task is overdue, reading the clock at call time.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.is_overdue_at(clock.utc())
    }

    /// Returns whether the task is assigned to `user`.
    #[must_use]
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assignee == Some(user)
    }

    /// Returns whether the task belongs to `category`.
    #[must_use]
    pub fn is_in_category(&self, category: CategoryId) -> bool {
        self.category == Some(category)
    }

    /// Returns whether the title or description contains `needle`,
    /// ignoring case. `needle` must already be lowercase.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(needle))
    }

    /// Assigns an identity if none is set and returns the effective one.
    ///
    /// An identity, once assigned, never changes.
    pub(crate) fn assign_id(&mut self, id: TaskId) -> TaskId {
        *self.id.get_or_insert(id)
    }

    /// Records an update at `at`.
    pub(crate) const fn mark_updated(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}
