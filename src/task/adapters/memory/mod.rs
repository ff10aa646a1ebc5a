//! In-memory adapters for task tracking.

mod task;
mod user_directory;

pub use task::InMemoryTaskRepository;
pub use user_directory::InMemoryUserDirectory;
