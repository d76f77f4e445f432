//! Application services for task orchestration.

mod lifecycle;
mod search;
mod statistics;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use statistics::TaskStatistics;
