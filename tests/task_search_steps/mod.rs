//! Step definitions for task search behaviour scenarios.

pub mod then;
pub mod when;
pub mod world;
