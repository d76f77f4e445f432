//! Users and categories referenced by tasks.
//!
//! Tasks hold user and category identities only. This module stores the
//! records behind those identities and resolves them on demand:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
