//! Service layer for calendar task creation, listing, completion and removal.

use crate::task::{
    domain::{
        CompletionStatus, DayOfWeek, Recurrence, SeriesPlan, Task, TaskDomainError, TaskId,
        TaskTitle, WeekCount, parse_task_day,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Request payload for creating a task or a weekly task series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    task_day: String,
    task_day_time: String,
    is_recurring: bool,
    week_count: i64,
    weekday: i64,
}

impl CreateTaskRequest {
    /// Creates a request for a single, non-recurring task.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        task_day: impl Into<String>,
        task_day_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            task_day: task_day.into(),
            task_day_time: task_day_time.into(),
            is_recurring: false,
            week_count: 0,
            weekday: 0,
        }
    }

    /// Turns the request into a weekly series on `weekday`.
    ///
    /// A non-positive `week_count` selects the default series length.
    #[must_use]
    pub const fn recurring(mut self, weekday: i64, week_count: i64) -> Self {
        self.is_recurring = true;
        self.weekday = weekday;
        self.week_count = week_count;
        self
    }

    fn into_plan(self) -> Result<SeriesPlan, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        if self.task_day.is_empty() {
            return Err(TaskDomainError::MissingTaskDay);
        }
        if self.task_day_time.trim().is_empty() {
            return Err(TaskDomainError::MissingTaskDayTime);
        }
        let task_day = parse_task_day(&self.task_day)?;
        let recurrence = if self.is_recurring {
            Recurrence::Weekly {
                weekday: DayOfWeek::from_index(self.weekday)?,
                week_count: WeekCount::for_recurring(self.week_count)?,
            }
        } else {
            Recurrence::Once
        };
        SeriesPlan::new(title, task_day, self.task_day_time, recurrence)
    }
}

/// Tasks materialised by one creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedTasks {
    /// A non-recurring task or a one-week series.
    Single(Task),
    /// A weekly series of two or more occurrences.
    Series(TaskSeries),
}

impl CreatedTasks {
    /// Returns every created task, the original first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        match self {
            Self::Single(task) => std::slice::from_ref(task),
            Self::Series(series) => series.tasks(),
        }
    }
}

/// A stored weekly series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSeries {
    tasks: Vec<Task>,
    weekday: DayOfWeek,
    start_date: NaiveDate,
}

impl TaskSeries {
    /// Returns the occurrences in creation order, the original first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consumes the series and returns its occurrences.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Returns the weekday every occurrence falls on.
    #[must_use]
    pub const fn weekday(&self) -> DayOfWeek {
        self.weekday
    }

    /// Returns the date of the first occurrence.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// A task as presented by day listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    /// The listed task.
    pub task: Task,
    /// Weekday of the task, present only for recurring tasks.
    pub weekday: Option<DayOfWeek>,
}

impl From<Task> for TaskListing {
    fn from(task: Task) -> Self {
        let weekday = task.is_recurring().then(|| task.weekday());
        Self { task, weekday }
    }
}

/// Service-level errors for calendar task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for calendar task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Calendar task orchestration service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new calendar task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task, expanding recurring requests into one row per week.
    ///
    /// The original is stored first; later occurrences are stored as a single
    /// batch linked to it. A failing batch leaves the original in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when input validation fails or
    /// [`TaskLifecycleError::Repository`] when either write fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<CreatedTasks> {
        debug!(?request, "received task creation request");
        let plan = request.into_plan()?;

        let original = self.repository.store(plan.original()).await?;
        info!(
            task_id = %original.id(),
            task_day = %original.task_day(),
            recurring = original.is_recurring(),
            "created task"
        );

        let Recurrence::Weekly { weekday, .. } = plan.recurrence() else {
            return Ok(CreatedTasks::Single(original));
        };
        let follow_ups = plan.follow_ups(original.id());
        if follow_ups.is_empty() {
            return Ok(CreatedTasks::Single(original));
        }

        let generated = match self.repository.store_batch(follow_ups).await {
            Ok(generated) => generated,
            Err(err) => {
                error!(
                    original_task_id = %original.id(),
                    error = %err,
                    "storing recurring occurrences failed; original task remains"
                );
                return Err(err.into());
            }
        };
        info!(
            original_task_id = %original.id(),
            occurrences = generated.len(),
            weekday = weekday.index(),
            "created recurring occurrences"
        );

        let mut tasks = Vec::with_capacity(generated.len() + 1);
        tasks.push(original);
        tasks.extend(generated);
        Ok(CreatedTasks::Series(TaskSeries {
            tasks,
            weekday,
            start_date: plan.start_date(),
        }))
    }

    /// Lists the tasks occurring on a `YYYY-MM-DD` date.
    ///
    /// Returns an empty list when nothing is scheduled that day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the date is missing or
    /// malformed, or [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn tasks_on_day(&self, date: &str) -> TaskLifecycleResult<Vec<TaskListing>> {
        if date.is_empty() {
            return Err(TaskDomainError::MissingDate.into());
        }
        let day = parse_task_day(date)?;
        let tasks = self.repository.find_by_day(day).await?;
        debug!(%day, count = tasks.len(), "listed tasks");
        Ok(tasks.into_iter().map(TaskListing::from).collect())
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or another repository error when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(id)))
    }

    /// Marks a single task as completed or pending.
    ///
    /// Completing stamps the task with the current time; reopening clears
    /// the stamp. Other occurrences of the same series are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or another repository error when the update fails.
    pub async fn update_completion(&self, id: TaskId, completed: bool) -> TaskLifecycleResult<Task> {
        let completion = CompletionStatus::from_flag(completed, &*self.clock);
        let updated = self.repository.update_completion(id, completion).await?;
        info!(task_id = %id, completed, "updated task completion");
        Ok(updated)
    }

    /// Deletes one task.
    ///
    /// Deleting a missing task succeeds, and deleting a series original
    /// leaves its other occurrences in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the delete fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let removed = self.repository.delete(id).await?;
        info!(task_id = %id, removed, "deleted task");
        Ok(())
    }
}
