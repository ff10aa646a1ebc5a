//! Domain model for task tracking.
//!
//! The task domain models ownership, the `doing -> done -> deleted`
//! lifecycle, opaque identifiers, and page arithmetic while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod masked;
mod paging;
mod task;
mod user;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use masked::{EntityKind, MaskedId, MaskedIdError};
pub use paging::{DEFAULT_PAGE_LIMIT, PageRequest};
pub use task::{
    NewTask, PersistedTaskData, Task, TaskChanges, TaskDescription, TaskStatus, TaskTitle,
};
pub use user::SimpleUser;
