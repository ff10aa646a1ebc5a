//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod user_directory;
pub mod validator;

pub use repository::{
    TaskFilter, TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
pub use user_directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
pub use validator::{TaskRequestValidator, ValidationConfig, ValidationResult};

#[cfg(test)]
pub use repository::MockTaskRepository;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
