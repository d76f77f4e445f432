//! Repository ports for user and category storage.
//!
//! Lookups report absence as `None` or an empty list. Updates and deletes
//! aimed at unknown identities are silent no-ops.

use crate::directory::domain::{Category, CategoryId, User, UserId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryRepositoryResult<T> = Result<T, DirectoryRepositoryError>;

/// User storage contract.
pub trait UserRepository: Send + Sync {
    /// Stores a user, assigning the next identity when it has none.
    ///
    /// Returns the stored user with its identity populated.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn save(&self, user: User) -> DirectoryRepositoryResult<User>;

    /// Finds a user by identity.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_id(&self, id: UserId) -> DirectoryRepositoryResult<Option<User>>;

    /// Finds a user by email address, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_email(&self, email: &str) -> DirectoryRepositoryResult<Option<User>>;

    /// Returns a snapshot of every user.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_all(&self) -> DirectoryRepositoryResult<Vec<User>>;

    /// Returns users in `department`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_department(&self, department: &str) -> DirectoryRepositoryResult<Vec<User>>;

    /// Returns active users.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_active(&self) -> DirectoryRepositoryResult<Vec<User>>;

    /// Overwrites a stored user. Does nothing for unknown identities.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn update(&self, user: &User) -> DirectoryRepositoryResult<()>;

    /// Removes a user. Does nothing for unknown identities.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn delete(&self, id: UserId) -> DirectoryRepositoryResult<()>;
}

/// Category storage contract.
pub trait CategoryRepository: Send + Sync {
    /// Stores a category, assigning the next identity when it has none.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn save(&self, category: Category) -> DirectoryRepositoryResult<Category>;

    /// Finds a category by identity.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_id(&self, id: CategoryId) -> DirectoryRepositoryResult<Option<Category>>;

    /// Finds a category by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_by_name(&self, name: &str) -> DirectoryRepositoryResult<Option<Category>>;

    /// Returns a snapshot of every category.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn find_all(&self) -> DirectoryRepositoryResult<Vec<Category>>;

    /// Overwrites a stored category. Does nothing for unknown identities.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn update(&self, category: &Category) -> DirectoryRepositoryResult<()>;

    /// Removes a category. Does nothing for unknown identities.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn delete(&self, id: CategoryId) -> DirectoryRepositoryResult<()>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
