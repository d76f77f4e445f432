//! Domain model for the user and category directory.

mod category;
mod ids;
mod user;

pub use category::{Category, DEFAULT_CATEGORY_COLOR};
pub use ids::{CategoryId, UserId};
pub use user::User;
