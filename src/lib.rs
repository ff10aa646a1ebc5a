//! Tasktrack: task tracking service core.
//!
//! This crate provides the business logic of a task-tracking service:
//! ownership checks, the task lifecycle, opaque identifiers, and
//! enrichment of tasks with user profiles fetched from a separate user
//! service.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, authorization, and listing

pub mod task;
