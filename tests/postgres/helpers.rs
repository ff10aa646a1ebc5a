//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use tasktrack::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, TaskDescription, TaskTitle, UserId},
};
use tokio::runtime::Runtime;

/// SQL creating the `tasks` table and its indexes.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_tasks/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "tasktrack_test_template";

/// Creates a tokio runtime for driving async repository calls.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> eyre::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Ensures the template database exists with the schema applied.
///
/// # Errors
///
/// Returns an error if template creation or migration fails.
pub fn ensure_template(cluster: &TestCluster) -> eyre::Result<()> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            conn.batch_execute(CREATE_TASKS_SQL)
                .map_err(|e| eyre::eyre!("migration failed: {e}"))?;
            Ok(())
        })
        .map_err(|e| eyre::eyre!("template setup failed: {e}"))
}

/// Drops a per-test database when the test finishes, even on panic.
pub struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// Repository bound to a fresh database cloned from the template.
///
/// The repository is declared first so its pool closes before the
/// database is dropped.
pub struct PreparedRepo {
    /// Repository under test.
    pub repo: PostgresTaskRepository,
    _cleanup: CleanupGuard,
}

/// Creates a fresh database from the template and a repository over it.
///
/// # Errors
///
/// Returns an error if template setup, database creation, or pool
/// construction fails.
pub fn prepare_repository(
    cluster: &'static TestCluster,
    label: &str,
) -> eyre::Result<PreparedRepo> {
    ensure_template(cluster)?;
    let db_name = format!("test_{label}_{}", uuid::Uuid::new_v4().simple());
    cluster
        .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
        .map_err(|e| eyre::eyre!("database creation failed: {e}"))?;
    let url = cluster.connection().database_url(&db_name);
    let cleanup = CleanupGuard { cluster, db_name };

    let manager = ConnectionManager::<PgConnection>::new(url);
    // Pool size of 1 keeps statement ordering deterministic.
    let pool = Pool::builder().max_size(1).build(manager)?;
    Ok(PreparedRepo {
        repo: PostgresTaskRepository::new(pool),
        _cleanup: cleanup,
    })
}

/// Builds a user identifier from a non-zero raw key.
///
/// # Errors
///
/// Returns an error if `raw` is zero.
pub fn user(raw: u32) -> eyre::Result<UserId> {
    Ok(UserId::from_raw(raw)?)
}

/// Drafts a `doing` task for `owner`.
///
/// # Errors
///
/// Returns an error if `title` is blank or too long.
pub fn draft(owner: UserId, title: &str) -> eyre::Result<NewTask> {
    Ok(NewTask::new(
        owner,
        TaskTitle::new(title)?,
        TaskDescription::new("details")?,
        &DefaultClock,
    ))
}
