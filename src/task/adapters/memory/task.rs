//! In-memory repository for task tracking tests and embedding.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, PageRequest, PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskFilter, TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially from 1, like a database sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: u32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Rebuilds a stored task with a new status and update timestamp.
fn with_status(task: &Task, status: TaskStatus, updated_at: DateTime<Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: task.id(),
        owner: task.owner(),
        title: task.title().clone(),
        description: task.description().clone(),
        status,
        created_at: task.created_at(),
        updated_at,
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let next_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| lock_error("task identifier sequence exhausted"))?;
        let task_id = TaskId::from_raw(next_id).map_err(TaskRepositoryError::persistence)?;

        let stored = task.clone().into_task(task_id);
        state.last_id = next_id;
        state.tasks.insert(task_id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;

        // The creation timestamp is owned by the store.
        *stored = Task::from_persisted(PersistedTaskData {
            id: task.id(),
            owner: stored.owner(),
            title: task.title().clone(),
            description: task.description().clone(),
            status: task.status(),
            created_at: stored.created_at(),
            updated_at: task.updated_at(),
        });
        Ok(())
    }

    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        *stored = with_status(stored, TaskStatus::Deleted, deleted_at);
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_page(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let state = self.state.read().map_err(lock_error)?;
        let offset = usize::try_from(page.offset()).map_err(TaskRepositoryError::persistence)?;
        let limit = usize::try_from(page.limit()).map_err(TaskRepositoryError::persistence)?;

        let matching: Vec<&Task> = state
            .tasks
            .values()
            .rev()
            .filter(|task| filter.matches(task))
            .collect();
        let total = u64::try_from(matching.len()).map_err(TaskRepositoryError::persistence)?;
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(TaskPage { items, total })
    }
}
