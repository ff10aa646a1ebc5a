//! Task tracking for users of the platform.
//!
//! Owners create tasks, edit them while they are `doing`, and soft-delete
//! them; everyone can read and list live tasks, enriched with the owner's
//! public profile from the user service. Internal identifiers never leave
//! the service: clients only see masked identifiers. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Request validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
