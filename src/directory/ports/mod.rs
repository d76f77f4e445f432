//! Port contracts for the user and category directory.

pub mod repository;

pub use repository::{
    CategoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult, UserRepository,
};
