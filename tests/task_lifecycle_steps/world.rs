//! Shared world state for task lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use tasktrack::task::{
    adapters::memory::{InMemoryTaskRepository, InMemoryUserDirectory},
    domain::UserId,
    services::{ListTasksResponse, Requester, TaskService, TaskServiceError},
    validation::DefaultTaskRequestValidator,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<
    InMemoryTaskRepository,
    InMemoryUserDirectory,
    DefaultTaskRequestValidator,
    DefaultClock,
>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub service: TestTaskService,
    pub users: Arc<InMemoryUserDirectory>,
    pub handles: HashMap<String, UserId>,
    pub next_user_id: u32,
    pub current_task: Option<String>,
    pub last_result: Option<Result<String, TaskServiceError>>,
    pub last_listing: Option<ListTasksResponse>,
}

impl TaskLifecycleWorld {
    /// Creates a world with no users and no tasks.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserDirectory::new());
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&users),
            Arc::new(DefaultTaskRequestValidator::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            users,
            handles: HashMap::new(),
            next_user_id: 1,
            current_task: None,
            last_result: None,
            last_listing: None,
        }
    }

    /// Resolves a scenario handle to a requester.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle was never registered.
    pub fn requester(&self, handle: &str) -> Result<Requester, eyre::Report> {
        self.handles
            .get(handle)
            .copied()
            .map(Requester::new)
            .ok_or_else(|| eyre::eyre!("unknown user handle '{handle}'"))
    }

    /// Returns the masked identifier of the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error if no task has been created yet.
    pub fn task_id(&self) -> Result<String, eyre::Report> {
        self.current_task
            .clone()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
