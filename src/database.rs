//! Connection pool construction and schema bootstrap.

use crate::config::DatabaseSettings;
use crate::task::adapters::postgres::TaskPgPool;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// SQL creating the `tasks` table and its indexes. Safe to run repeatedly.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../migrations/2024-01-01-000000_create_tasks/up.sql");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),

    /// Applying the schema failed.
    #[error("schema bootstrap failed: {0}")]
    Schema(#[from] diesel::result::Error),

    /// The blocking bootstrap task did not complete.
    #[error("schema bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool for the configured database.
///
/// The pool connects lazily, so an unreachable server surfaces on first use
/// (normally [`apply_schema`] at startup).
#[must_use]
pub fn build_pool(settings: &DatabaseSettings) -> TaskPgPool {
    let manager = ConnectionManager::<PgConnection>::new(settings.url.as_str());
    Pool::builder()
        .max_size(settings.max_connections.max(1))
        .build_unchecked(manager)
}

/// Creates the task schema if it does not exist yet.
///
/// # Errors
///
/// Returns [`DatabaseError`] when no connection is available or the SQL
/// fails.
pub async fn apply_schema(pool: &TaskPgPool) -> Result<(), DatabaseError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get()?;
        connection.batch_execute(CREATE_TASKS_SQL)?;
        Ok::<(), DatabaseError>(())
    })
    .await?
}
