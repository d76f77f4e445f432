//! Task field validation.
//!
//! Individual rules live in [`rules`]; [`DefaultTaskValidator`] applies them
//! in order and reports the first failure.
//!
//! The completion percentage rule can reject values that
//! [`Task::set_completion_percentage`](crate::task::domain::Task::set_completion_percentage)
//! would silently clamp. The two policies are intentionally separate: the
//! rule judges a raw value as supplied, the entity guards its own field.

mod error;
pub mod rules;
mod service;

pub use error::TaskValidationError;
pub use service::DefaultTaskValidator;
