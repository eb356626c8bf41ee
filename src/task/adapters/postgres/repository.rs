//! `PostgreSQL` repository implementation for calendar task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        CompletionStatus, NewTask, PersistedTaskData, Task, TaskId, TaskTitle, WeekCount,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
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
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(&task)?;
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

    async fn store_batch(&self, tasks: Vec<NewTask>) -> TaskRepositoryResult<Vec<Task>> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }
        let new_rows = tasks
            .iter()
            .map(to_new_row)
            .collect::<TaskRepositoryResult<Vec<_>>>()?;

        self.run_blocking(move |connection| {
            // A multi-row INSERT is a single statement, so the batch commits
            // or fails as a whole. Sequence values follow VALUES order.
            let mut rows = diesel::insert_into(tasks::table)
                .values(&new_rows)
                .returning(TaskRow::as_returning())
                .get_results::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.sort_by_key(|row| row.id);
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_day(&self, day: NaiveDate) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::task_day.eq(day))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update_completion(
        &self,
        id: TaskId,
        completion: CompletionStatus,
    ) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.value()))
                .set((
                    tasks::completed.eq(completion.is_completed()),
                    tasks::completed_at.eq(completion.completed_at()),
                    tasks::updated_at.eq(diesel::dsl::now),
                ))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> TaskRepositoryResult<NewTaskRow> {
    let week_count =
        i32::try_from(task.week_count().value()).map_err(TaskRepositoryError::persistence)?;

    Ok(NewTaskRow {
        title: task.title().as_str().to_owned(),
        task_day: task.task_day(),
        task_day_time: task.task_day_time().to_owned(),
        is_recurring: task.is_recurring(),
        week_count,
        original_task_id: task.original_task_id().map(TaskId::value),
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        completed,
        completed_at,
        task_day,
        task_day_time,
        is_recurring,
        week_count: persisted_week_count,
        original_task_id,
        created_at,
        updated_at,
    } = row;

    let completion = CompletionStatus::from_parts(completed, completed_at).ok_or_else(|| {
        TaskRepositoryError::persistence(std::io::Error::other(format!(
            "task {id} has inconsistent completion columns"
        )))
    })?;
    let week_count = u32::try_from(persisted_week_count)
        .ok()
        .and_then(WeekCount::from_persisted)
        .ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(format!(
                "task {id} has invalid week_count {persisted_week_count}"
            )))
        })?;

    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskRepositoryError::persistence)?,
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        completion,
        task_day,
        task_day_time,
        is_recurring,
        week_count,
        original_task_id: original_task_id
            .map(TaskId::new)
            .transpose()
            .map_err(TaskRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
