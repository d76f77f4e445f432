//! Tasktrack: in-memory work item tracking.
//!
//! This crate tracks tasks owned by users, with a status and priority
//! lifecycle, due-date tracking, and multi-criterion search.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`task`]: Task storage, lookup, search, and lifecycle rules
//! - [`directory`]: Users and categories referenced by tasks

pub mod directory;
pub mod task;
