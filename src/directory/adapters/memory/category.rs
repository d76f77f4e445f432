//! In-memory category repository.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::directory::{
    domain::{Category, CategoryId},
    ports::{CategoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult},
};

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<InMemoryCategoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryCategoryState {
    categories: HashMap<CategoryId, Category>,
    last_id: u64,
}

impl InMemoryCategoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DirectoryRepositoryResult<RwLockReadGuard<'_, InMemoryCategoryState>> {
        self.state.read().map_err(|err| {
            DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> DirectoryRepositoryResult<RwLockWriteGuard<'_, InMemoryCategoryState>> {
        self.state.write().map_err(|err| {
            DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn save(&self, mut category: Category) -> DirectoryRepositoryResult<Category> {
        let mut state = self.write()?;
        let next = CategoryId::new(state.last_id.saturating_add(1));
        let id = category.assign_id(next);
        state.last_id = state.last_id.max(id.value());
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    fn find_by_id(&self, id: CategoryId) -> DirectoryRepositoryResult<Option<Category>> {
        let state = self.read()?;
        Ok(state.categories.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> DirectoryRepositoryResult<Option<Category>> {
        let wanted = name.to_lowercase();
        let state = self.read()?;
        Ok(state
            .categories
            .values()
            .find(|category| category.name().to_lowercase() == wanted)
            .cloned())
    }

    fn find_all(&self) -> DirectoryRepositoryResult<Vec<Category>> {
        let state = self.read()?;
        Ok(state.categories.values().cloned().collect())
    }

    fn update(&self, category: &Category) -> DirectoryRepositoryResult<()> {
        let Some(id) = category.id() else {
            return Ok(());
        };
        let mut state = self.write()?;
        if let Some(stored) = state.categories.get_mut(&id) {
            *stored = category.clone();
        }
        Ok(())
    }

    fn delete(&self, id: CategoryId) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        state.categories.remove(&id);
        Ok(())
    }
}
