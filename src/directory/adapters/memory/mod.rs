//! In-memory directory adapters.
//!
//! State lives behind a single lock per repository. Clones share state.

mod category;
mod user;

pub use category::InMemoryCategoryRepository;
pub use user::InMemoryUserRepository;
