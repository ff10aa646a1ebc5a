//! Service layer for task creation, retrieval, listing, editing, and
//! soft deletion.

use super::{
    CreateTaskRequest, CreateTaskResponse, DeleteTaskRequest, GetTaskRequest, ListTasksRequest,
    ListTasksResponse, Requester, TaskAcknowledgement, TaskView, UpdateTaskRequest,
    requests::present,
};
use crate::task::{
    domain::{
        MaskedId, MaskedIdError, NewTask, PageRequest, SimpleUser, Task, TaskChanges,
        TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle, UserId,
    },
    error::ValidationError,
    ports::{
        TaskFilter, TaskPage, TaskRepository, TaskRepositoryError, TaskRequestValidator,
        UserDirectory, UserDirectoryError,
    },
};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

const CREATED_MESSAGE: &str = "create task successfully";
const UPDATED_MESSAGE: &str = "update task successfully";
const DELETED_MESSAGE: &str = "delete task successfully";

/// Coarse classification of service errors for transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// Malformed or missing request fields.
    Validation,
    /// An opaque identifier could not be decoded.
    InvalidIdentifier,
    /// The task is absent or soft-deleted.
    NotFound,
    /// The caller may not perform the mutation.
    Forbidden,
    /// A collaborator failed.
    Internal,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Field validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A domain value could not be constructed from the request.
    #[error(transparent)]
    InvalidInput(TaskDomainError),
    /// An opaque identifier could not be decoded.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] MaskedIdError),
    /// The task does not exist or has been deleted.
    #[error("task {0} not found")]
    NotFound(MaskedId),
    /// The mutation is not permitted for this caller or task status.
    #[error("forbidden: {0}")]
    Forbidden(TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
    /// User directory lookup failed.
    #[error(transparent)]
    UserLookup(#[from] UserDirectoryError),
}

impl TaskServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Validation(_) | Self::InvalidInput(_) => TaskErrorKind::Validation,
            Self::InvalidIdentifier(_) => TaskErrorKind::InvalidIdentifier,
            Self::NotFound(_) => TaskErrorKind::NotFound,
            Self::Forbidden(_) => TaskErrorKind::Forbidden,
            Self::Repository(_) | Self::UserLookup(_) => TaskErrorKind::Internal,
        }
    }

    /// Returns `true` when the caller, not the service, is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self.kind(), TaskErrorKind::Internal)
    }
}

impl From<TaskDomainError> for TaskServiceError {
    fn from(err: TaskDomainError) -> Self {
        if err.is_authorization_failure() {
            Self::Forbidden(err)
        } else {
            Self::InvalidInput(err)
        }
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::NotFound(task_id.masked()),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle and authorization service.
///
/// The service holds no per-request state; every collaborator is shared
/// behind an `Arc` and must be safe for concurrent use. Update and delete
/// read the task and write it back without a concurrency token, so racing
/// mutations of the same task resolve as last-write-wins in the store.
#[derive(Clone)]
pub struct TaskService<R, U, V, C>
where
    R: TaskRepository,
    U: UserDirectory,
    V: TaskRequestValidator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    users: Arc<U>,
    validator: Arc<V>,
    clock: Arc<C>,
}

impl<R, U, V, C> TaskService<R, U, V, C>
where
    R: TaskRepository,
    U: UserDirectory,
    V: TaskRequestValidator,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, users: Arc<U>, validator: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            repository,
            users,
            validator,
            clock,
        }
    }

    /// Creates a task owned by the requester in status `doing`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid fields or
    /// [`TaskServiceError::Repository`] when the store rejects the insert.
    pub async fn create(
        &self,
        requester: &Requester,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<CreateTaskResponse> {
        self.validator.validate_create(&request)?;

        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description)?;
        let draft = NewTask::new(requester.user_id(), title, description, &*self.clock);
        let task = self.repository.insert(&draft).await?;

        info!(task_id = %task.id(), owner = %task.owner(), "created task");
        Ok(CreateTaskResponse {
            message: CREATED_MESSAGE.to_owned(),
            id: task.id().masked(),
        })
    }

    /// Retrieves a task enriched with its owner's profile.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidIdentifier`] for undecodable ids,
    /// [`TaskServiceError::NotFound`] for absent or deleted tasks, and
    /// [`TaskServiceError::UserLookup`] when the owner cannot be fetched.
    pub async fn get(
        &self,
        requester: &Requester,
        request: GetTaskRequest,
    ) -> TaskServiceResult<TaskView> {
        self.validator.validate_get(&request)?;

        let task_id = TaskId::from_masked(&request.id)?;
        let task = self.find_task_or_error(task_id).await?;
        if task.status().is_terminal() {
            return Err(TaskServiceError::NotFound(task_id.masked()));
        }
        let owner = self.users.find_by_id(task.owner()).await?;

        debug!(task_id = %task_id, requester = %requester.user_id(), "read task");
        Ok(TaskView::new(&task, Some(&owner)))
    }

    /// Lists non-deleted tasks, newest first, enriched with owner profiles.
    ///
    /// Owners missing from the user service leave the task's `user` unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid paging or status
    /// values, [`TaskServiceError::InvalidIdentifier`] for an undecodable
    /// owner filter, or collaborator failures.
    pub async fn list(
        &self,
        requester: &Requester,
        request: ListTasksRequest,
    ) -> TaskServiceResult<ListTasksResponse> {
        self.validator.validate_list(&request)?;

        let filter = build_filter(&request)?;
        let page = PageRequest::new(request.page, request.limit)?;
        let TaskPage { items, total } = self.repository.find_page(&filter, page).await?;
        let live_tasks: Vec<Task> = items
            .into_iter()
            .filter(|task| !task.status().is_terminal())
            .collect();
        let owners = self.fetch_owners(&live_tasks).await?;

        let views = live_tasks
            .iter()
            .map(|task| TaskView::new(task, owners.get(&task.owner())))
            .collect();

        debug!(
            requester = %requester.user_id(),
            page = page.page(),
            limit = page.limit(),
            total,
            "listed tasks"
        );
        Ok(ListTasksResponse {
            items: views,
            has_next: page.has_next(total),
            page: page.page(),
            limit: page.limit(),
            total,
        })
    }

    /// Applies owner edits to a task in status `doing`.
    ///
    /// Absent or empty fields are left unchanged. A status name moves the
    /// task through the lifecycle transition rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist and
    /// [`TaskServiceError::Forbidden`] when the requester is not the owner or
    /// the task is no longer `doing`.
    pub async fn update(
        &self,
        requester: &Requester,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<TaskAcknowledgement> {
        self.validator.validate_update(&request)?;

        let task_id = TaskId::from_masked(&request.id)?;
        let mut task = self.find_task_or_error(task_id).await?;
        authorize(&task, requester)?;
        task.ensure_editable()
            .inspect_err(|err| warn!(task_id = %task_id, %err, "rejected task update"))?;

        let changes = build_changes(&request)?;
        task.apply_changes(changes, &*self.clock)
            .inspect_err(|err| warn!(task_id = %task_id, %err, "rejected task update"))?;
        self.repository.update(&task).await?;

        info!(task_id = %task_id, status = %task.status(), "updated task");
        Ok(TaskAcknowledgement::new(UPDATED_MESSAGE))
    }

    /// Soft-deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist and
    /// [`TaskServiceError::Forbidden`] when the requester is not the owner or
    /// the task is already deleted.
    pub async fn delete(
        &self,
        requester: &Requester,
        request: DeleteTaskRequest,
    ) -> TaskServiceResult<TaskAcknowledgement> {
        self.validator.validate_delete(&request)?;

        let task_id = TaskId::from_masked(&request.id)?;
        let mut task = self.find_task_or_error(task_id).await?;
        authorize(&task, requester)?;

        task.soft_delete(&*self.clock)
            .inspect_err(|err| warn!(task_id = %task_id, %err, "rejected task deletion"))?;
        self.repository
            .soft_delete(task.id(), task.updated_at())
            .await?;

        info!(task_id = %task_id, "deleted task");
        Ok(TaskAcknowledgement::new(DELETED_MESSAGE))
    }

    async fn find_task_or_error(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TaskServiceError::NotFound(task_id.masked()))
    }

    /// Fetches the distinct owners of `tasks` in one batched lookup.
    async fn fetch_owners(
        &self,
        tasks: &[Task],
    ) -> TaskServiceResult<HashMap<UserId, SimpleUser>> {
        let mut seen = HashSet::new();
        let owner_ids: Vec<UserId> = tasks
            .iter()
            .map(Task::owner)
            .filter(|owner| seen.insert(*owner))
            .collect();
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = self.users.find_by_ids(&owner_ids).await?;
        Ok(users.into_iter().map(|user| (user.id(), user)).collect())
    }
}

fn authorize(task: &Task, requester: &Requester) -> TaskServiceResult<()> {
    task.ensure_owned_by(requester.user_id()).map_err(|err| {
        warn!(task_id = %task.id(), requester = %requester.user_id(), "non-owner mutation");
        TaskServiceError::from(err)
    })
}

fn build_filter(request: &ListTasksRequest) -> TaskServiceResult<TaskFilter> {
    let mut filter = TaskFilter::new();
    if let Some(owner) = present(request.user_id.as_deref()) {
        filter = filter.with_owner(UserId::from_masked(owner)?);
    }
    if let Some(status) = present(request.status.as_deref()) {
        let parsed = TaskStatus::try_from(status).map_err(ValidationError::from)?;
        filter = filter.with_status(parsed);
    }
    Ok(filter)
}

fn build_changes(request: &UpdateTaskRequest) -> TaskServiceResult<TaskChanges> {
    let mut changes = TaskChanges::new();
    if let Some(title) = present(request.title.as_deref()) {
        changes = changes.with_title(TaskTitle::new(title)?);
    }
    if let Some(description) = present(request.description.as_deref()) {
        changes = changes.with_description(TaskDescription::new(description)?);
    }
    if let Some(status) = present(request.status.as_deref()) {
        let parsed = TaskStatus::try_from(status).map_err(ValidationError::from)?;
        changes = changes.with_status(parsed);
    }
    Ok(changes)
}
