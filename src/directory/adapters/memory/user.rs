//! In-memory user repository.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::directory::{
    domain::{User, UserId},
    ports::{DirectoryRepositoryError, DirectoryRepositoryResult, UserRepository},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    last_id: u64,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DirectoryRepositoryResult<RwLockReadGuard<'_, InMemoryUserState>> {
        self.state.read().map_err(|err| {
            DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> DirectoryRepositoryResult<RwLockWriteGuard<'_, InMemoryUserState>> {
        self.state.write().map_err(|err| {
            DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn collect_where(&self, keep: impl Fn(&User) -> bool) -> DirectoryRepositoryResult<Vec<User>> {
        let state = self.read()?;
        Ok(state.users.values().filter(|user| keep(user)).cloned().collect())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, mut user: User) -> DirectoryRepositoryResult<User> {
        let mut state = self.write()?;
        let next = UserId::new(state.last_id.saturating_add(1));
        let id = user.assign_id(next);
        state.last_id = state.last_id.max(id.value());
        state.users.insert(id, user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> DirectoryRepositoryResult<Option<User>> {
        let state = self.read()?;
        Ok(state.users.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> DirectoryRepositoryResult<Option<User>> {
        let wanted = email.to_lowercase();
        let state = self.read()?;
        Ok(state
            .users
            .values()
            .find(|user| user.email().to_lowercase() == wanted)
            .cloned())
    }

    fn find_all(&self) -> DirectoryRepositoryResult<Vec<User>> {
        self.collect_where(|_| true)
    }

    fn find_by_department(&self, department: &str) -> DirectoryRepositoryResult<Vec<User>> {
        let wanted = department.to_lowercase();
        self.collect_where(|user| user.department().to_lowercase() == wanted)
    }

    fn find_active(&self) -> DirectoryRepositoryResult<Vec<User>> {
        self.collect_where(User::is_active)
    }

    fn update(&self, user: &User) -> DirectoryRepositoryResult<()> {
        let Some(id) = user.id() else {
            return Ok(());
        };
        let mut state = self.write()?;
        if let Some(stored) = state.users.get_mut(&id) {
            *stored = user.clone();
        }
        Ok(())
    }

    fn delete(&self, id: UserId) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        state.users.remove(&id);
        Ok(())
    }
}
