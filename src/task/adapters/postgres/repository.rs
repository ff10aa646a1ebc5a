//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PageRequest, PersistedTaskData, Task, TaskDescription, TaskId, TaskStatus,
        TaskTitle, UserId,
    },
    ports::{TaskFilter, TaskPage, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task)?;
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let db_id = to_db_id(task_id.value())?;
        let changeset = TaskChangeset {
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status().as_str().to_owned(),
            updated_at: task.updated_at(),
        };

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(db_id)))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn soft_delete(
        &self,
        id: TaskId,
        deleted_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        let db_id = to_db_id(id.value())?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(db_id)))
                .set((
                    tasks::status.eq(TaskStatus::Deleted.as_str()),
                    tasks::updated_at.eq(deleted_at),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let db_id = to_db_id(id.value())?;
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(db_id))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_page(
        &self,
        filter: &TaskFilter,
        page: PageRequest,
    ) -> TaskRepositoryResult<TaskPage> {
        let lookup_filter = *filter;
        let offset = i64::try_from(page.offset()).map_err(TaskRepositoryError::persistence)?;
        let limit = i64::from(page.limit());

        self.run_blocking(move |connection| {
            let total = filtered_tasks(&lookup_filter)?
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let rows = filtered_tasks(&lookup_filter)?
                .order(tasks::id.desc())
                .offset(offset)
                .limit(limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let items = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            let total_count = u64::try_from(total).map_err(TaskRepositoryError::persistence)?;
            Ok(TaskPage {
                items,
                total: total_count,
            })
        })
        .await
    }
}

/// Builds the listing query: non-deleted rows narrowed by `filter`.
pub(super) fn filtered_tasks(filter: &TaskFilter) -> TaskRepositoryResult<tasks::BoxedQuery<'static, Pg>> {
    let mut query = tasks::table
        .filter(tasks::status.ne(TaskStatus::Deleted.as_str()))
        .into_boxed();
    if let Some(owner) = filter.owner {
        query = query.filter(tasks::user_id.eq(to_db_id(owner.value())?));
    }
    if let Some(status) = filter.status {
        query = query.filter(tasks::status.eq(status.as_str()));
    }
    Ok(query)
}

fn to_db_id(value: u32) -> TaskRepositoryResult<i32> {
    i32::try_from(value).map_err(TaskRepositoryError::persistence)
}

pub(super) fn to_new_row(task: &NewTask) -> TaskRepositoryResult<NewTaskRow> {
    Ok(NewTaskRow {
        user_id: to_db_id(task.owner().value())?,
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

pub(super) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        title,
        description,
        status,
        created_at,
        updated_at,
    } = row;

    let raw_id = u32::try_from(id).map_err(TaskRepositoryError::persistence)?;
    let raw_owner = u32::try_from(user_id).map_err(TaskRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_raw(raw_id).map_err(TaskRepositoryError::persistence)?,
        owner: UserId::from_raw(raw_owner).map_err(TaskRepositoryError::persistence)?,
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        description: TaskDescription::new(description)
            .map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
