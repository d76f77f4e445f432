//! Task storage, lookup, and lifecycle management.
//!
//! This module owns every task record: it assigns identities, answers
//! equality and date-window queries, composes multi-criterion searches, and
//! applies the lifecycle rules around status changes and completion. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Field validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
