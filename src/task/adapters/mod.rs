//! Adapter implementations for task tracking ports.
//!
//! - [`memory`]: thread-safe in-memory repository and user directory
//! - [`postgres`]: Diesel-backed `PostgreSQL` task repository

pub mod memory;
pub mod postgres;
