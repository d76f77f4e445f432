//! Service layer for user registration and lookup.

use crate::directory::{
    domain::{User, UserId},
    ports::{DirectoryRepositoryError, UserRepository},
};
use crate::task::domain::Task;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for user operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// The name is empty after trimming.
    #[error("User name cannot be empty")]
    EmptyName,
    /// The email is empty after trimming.
    #[error("User email cannot be empty")]
    EmptyEmail,
    /// Another user already owns the email address.
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),
    /// An update was attempted on a user without an identity.
    #[error("User ID cannot be null")]
    MissingId,
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers an active user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::EmptyName`] or
    /// [`UserServiceError::EmptyEmail`] for blank input,
    /// [`UserServiceError::DuplicateEmail`] when the email is taken (ignoring
    /// case), or [`UserServiceError::Repository`] on storage failure.
    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        department: &str,
    ) -> UserServiceResult<User> {
        if name.trim().is_empty() {
            return Err(UserServiceError::EmptyName);
        }
        if email.trim().is_empty() {
            return Err(UserServiceError::EmptyEmail);
        }
        if self.repository.find_by_email(email)?.is_some() {
            return Err(UserServiceError::DuplicateEmail(email.to_owned()));
        }
        let user = self.repository.save(User::new(name, email, department))?;
        info!(user_id = ?user.id(), email, "user created");
        Ok(user)
    }

    /// Finds a user by identity.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn get_user_by_id(&self, id: UserId) -> UserServiceResult<Option<User>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Finds a user by email, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn get_user_by_email(&self, email: &str) -> UserServiceResult<Option<User>> {
        Ok(self.repository.find_by_email(email)?)
    }

    /// Returns every user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn get_all_users(&self) -> UserServiceResult<Vec<User>> {
        Ok(self.repository.find_all()?)
    }

    /// Returns active users.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn get_active_users(&self) -> UserServiceResult<Vec<User>> {
        Ok(self.repository.find_active()?)
    }

    /// Returns users in `department`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn get_users_by_department(&self, department: &str) -> UserServiceResult<Vec<User>> {
        Ok(self.repository.find_by_department(department)?)
    }

    /// Overwrites a stored user.
    ///
    /// Unknown identities are ignored by the repository.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::MissingId`] when `user` has never been
    /// saved, or [`UserServiceError::Repository`] on storage failure.
    pub fn update_user(&self, user: User) -> UserServiceResult<User> {
        if user.id().is_none() {
            return Err(UserServiceError::MissingId);
        }
        self.repository.update(&user)?;
        Ok(user)
    }

    /// Marks a user inactive. Does nothing when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn deactivate_user(&self, id: UserId) -> UserServiceResult<()> {
        let Some(mut user) = self.repository.find_by_id(id)? else {
            debug!(user_id = %id, "deactivation skipped for unknown user");
            return Ok(());
        };
        user.set_active(false);
        self.repository.update(&user)?;
        info!(user_id = %id, "user deactivated");
        Ok(())
    }

    /// Removes a user. Tasks referring to the user keep the stale identity.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn delete_user(&self, id: UserId) -> UserServiceResult<()> {
        self.repository.delete(id)?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// Resolves the current record of a task's assignee.
    ///
    /// Returns `None` when the task is unassigned or the user no longer
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] on storage failure.
    pub fn assignee_of(&self, task: &Task) -> UserServiceResult<Option<User>> {
        match task.assignee() {
            Some(id) => self.get_user_by_id(id),
            None => Ok(None),
        }
    }
}
