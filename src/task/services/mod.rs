//! Application services for task tracking.

mod lifecycle;
mod requester;
mod requests;
mod views;

pub use lifecycle::{TaskErrorKind, TaskService, TaskServiceError, TaskServiceResult};
pub use requester::Requester;
pub(crate) use requests::present;
pub use requests::{
    CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest, UpdateTaskRequest,
};
pub use views::{CreateTaskResponse, ListTasksResponse, TaskAcknowledgement, TaskView, UserView};
