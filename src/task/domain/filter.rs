//! Multi-criterion task search filter.

use super::{Priority, Status};
use crate::directory::domain::{CategoryId, UserId};
use std::fmt;

/// Immutable bag of independent, optional search criteria.
///
/// Absent criteria place no constraint on the result. Present criteria
/// combine with logical AND.
///
/// # Examples
///
/// ```
/// use tasktrack::task::domain::{Priority, TaskSearchFilter};
///
/// let filter = TaskSearchFilter::new();
/// assert!(!filter.has_filters());
///
/// let filter = filter.with_priority(Priority::High).with_keyword("login");
/// assert!(filter.has_filters());
/// assert_eq!(filter.keyword(), Some("login"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSearchFilter {
    keyword: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    assignee: Option<UserId>,
    category: Option<CategoryId>,
    overdue_only: bool,
}

impl TaskSearchFilter {
    /// Creates a filter with no criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter matching `keyword` only.
    #[must_use]
    pub fn for_keyword(keyword: impl Into<String>) -> Self {
        Self::new().with_keyword(keyword)
    }

    /// Matches tasks whose title or description contains `keyword`,
    /// ignoring case.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Matches tasks with exactly this status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Matches tasks with exactly this priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Matches tasks assigned to this user.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Matches tasks in this category.
    #[must_use]
    pub const fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Restricts matches to overdue tasks when `overdue_only` is set.
    #[must_use]
    pub const fn with_overdue_only(mut self, overdue_only: bool) -> Self {
        self.overdue_only = overdue_only;
        self
    }

    /// Returns the keyword criterion.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the assignee criterion.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the category criterion.
    #[must_use]
    pub const fn category(&self) -> Option<CategoryId> {
        self.category
    }

    /// Returns whether only overdue tasks should match.
    #[must_use]
    pub const fn overdue_only(&self) -> bool {
        self.overdue_only
    }

    /// Returns `true` when at least one criterion is set.
    ///
    /// A present keyword counts even when empty.
    #[must_use]
    pub const fn has_filters(&self) -> bool {
        self.keyword.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.assignee.is_some()
            || self.category.is_some()
            || self.overdue_only
    }
}

impl fmt::Display for TaskSearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_filters() {
            return f.write_str("<none>");
        }
        let mut parts = Vec::new();
        if let Some(keyword) = &self.keyword {
            parts.push(format!("keyword={keyword:?}"));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={status}"));
        }
        if let Some(priority) = self.priority {
            parts.push(format!("priority={priority}"));
        }
        if let Some(assignee) = self.assignee {
            parts.push(format!("assignee={assignee}"));
        }
        if let Some(category) = self.category {
            parts.push(format!("category={category}"));
        }
        if self.overdue_only {
            parts.push("overdue_only".to_owned());
        }
        f.write_str(&parts.join(" "))
    }
}
