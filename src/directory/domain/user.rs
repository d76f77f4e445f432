//! User records.

use super::UserId;
use serde::{Deserialize, Serialize};

/// A person tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
    department: String,
    active: bool,
}

impl User {
    /// Creates an active user without an identity.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            department: department.into(),
            active: true,
        }
    }

    /// Returns the identity, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns whether the user is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the department.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Marks the user active or inactive.
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Assigns an identity if none is set and returns the effective one.
    pub(crate) fn assign_id(&mut self, id: UserId) -> UserId {
        *self.id.get_or_insert(id)
    }
}
