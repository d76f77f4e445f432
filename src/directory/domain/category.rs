//! Category records.

use super::CategoryId;
use serde::{Deserialize, Serialize};

/// Display color given to new categories.
pub const DEFAULT_CATEGORY_COLOR: &str = "#000000";

/// A grouping tasks can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
    description: Option<String>,
    color: String,
}

impl Category {
    /// Creates a category with the default color and no identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            color: DEFAULT_CATEGORY_COLOR.to_owned(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns the identity, or `None` before the first save.
    #[must_use]
    pub const fn id(&self) -> Option<CategoryId> {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the display color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Assigns an identity if none is set and returns the effective one.
    pub(crate) fn assign_id(&mut self, id: CategoryId) -> CategoryId {
        *self.id.get_or_insert(id)
    }
}
