//! Application services for the user directory.

mod users;

pub use users::{UserService, UserServiceError, UserServiceResult};
