//! Domain model for task tracking.
//!
//! Tasks carry their own invariants (completion clamping and the derived
//! overdue condition) and refer to users and categories by identity only.

mod error;
mod filter;
mod ids;
mod priority;
mod progress;
mod schedule;
mod status;
mod task;

pub use error::{ParsePriorityError, ParseStatusError};
pub use filter::TaskSearchFilter;
pub use ids::TaskId;
pub use priority::Priority;
pub use progress::CompletionPercentage;
pub use schedule::{add_days, add_hours, days_until_due, format_date, format_date_time};
pub use status::Status;
pub use task::Task;
