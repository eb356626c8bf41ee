//! Calendar task endpoints.

use crate::api::{error::ApiError, state::AppState};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, CreatedTasks, TaskListing, TaskSeries},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

// ─── Request DTOs ───────────────────────────────────────────────────────────

/// Body of `POST /api/tasks`.
///
/// Required text fields default to empty so that their absence is reported
/// by domain validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskBody {
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// First day, `YYYY-MM-DD`.
    #[serde(default)]
    pub task_day: String,
    /// Free-form time label.
    #[serde(default)]
    pub task_day_time: String,
    /// Whether to create a weekly series.
    #[serde(default)]
    pub is_recurring: bool,
    /// Number of weekly occurrences; non-positive selects the default.
    #[serde(default)]
    pub week_count: i64,
    /// Weekday of the series, 0 (Sunday) to 6 (Saturday).
    #[serde(default)]
    pub weekday: i64,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let request = Self::new(body.title, body.task_day, body.task_day_time);
        if body.is_recurring {
            request.recurring(body.weekday, body.week_count)
        } else {
            request
        }
    }
}

/// Query string of `GET /api/tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Day to list, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Body of `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateTaskStatusBody {
    /// New completion flag.
    pub completed: bool,
}

// ─── Response DTOs ──────────────────────────────────────────────────────────

/// Full task representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Completion timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Calendar day.
    pub task_day: NaiveDate,
    /// Time label.
    pub task_day_time: String,
    /// Series membership flag.
    pub is_recurring: bool,
    /// Series length.
    pub week_count: u32,
    /// Series original, for generated occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_task_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            completed: task.is_completed(),
            completed_at: task.completed_at(),
            task_day: task.task_day(),
            task_day_time: task.task_day_time().to_owned(),
            is_recurring: task.is_recurring(),
            week_count: task.week_count().value(),
            original_task_id: task.original_task_id().map(TaskId::value),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Weekly series created by one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSeriesResponse {
    /// Occurrences, the original first.
    pub tasks: Vec<TaskResponse>,
    /// Weekday index of every occurrence.
    pub weekday: u8,
    /// Display name of the weekday.
    pub weekday_name: &'static str,
    /// Date of the first occurrence.
    pub start_date: NaiveDate,
}

impl From<&TaskSeries> for TaskSeriesResponse {
    fn from(series: &TaskSeries) -> Self {
        Self {
            tasks: series.tasks().iter().map(TaskResponse::from).collect(),
            weekday: series.weekday().index(),
            weekday_name: series.weekday().name(),
            start_date: series.start_date(),
        }
    }
}

/// Body returned by `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreateTaskResponse {
    /// One task.
    Single(TaskResponse),
    /// A weekly series.
    Series(TaskSeriesResponse),
}

impl From<&CreatedTasks> for CreateTaskResponse {
    fn from(created: &CreatedTasks) -> Self {
        match created {
            CreatedTasks::Single(task) => Self::Single(task.into()),
            CreatedTasks::Series(series) => Self::Series(series.into()),
        }
    }
}

/// Entry of the day listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListingResponse {
    /// Task identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Completion timestamp, `null` while pending.
    pub completed_at: Option<DateTime<Utc>>,
    /// Calendar day.
    pub task_day: NaiveDate,
    /// Time label.
    pub task_day_time: String,
    /// Series membership flag.
    pub is_recurring: bool,
    /// Series length.
    pub week_count: u32,
    /// Weekday index, recurring tasks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u8>,
    /// Weekday display name, recurring tasks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday_name: Option<&'static str>,
}

impl From<&TaskListing> for TaskListingResponse {
    fn from(listing: &TaskListing) -> Self {
        let task = &listing.task;
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            completed: task.is_completed(),
            completed_at: task.completed_at(),
            task_day: task.task_day(),
            task_day_time: task.task_day_time().to_owned(),
            is_recurring: task.is_recurring(),
            week_count: task.week_count().value(),
            weekday: listing.weekday.map(|day| day.index()),
            weekday_name: listing.weekday.map(|day| day.name()),
        }
    }
}

/// Acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
}

// ─── Handlers ───────────────────────────────────────────────────────────────

/// `POST /api/tasks`
///
/// # Errors
///
/// Returns [`ApiError`] for invalid input (400) or store failures (500).
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTaskResponse>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = payload?;
    let created = state.tasks.create_task(body.into()).await?;
    Ok((StatusCode::CREATED, Json(CreateTaskResponse::from(&created))))
}

/// `GET /api/tasks?date=YYYY-MM-DD`
///
/// # Errors
///
/// Returns [`ApiError`] for a missing or invalid date (400) or store
/// failures (500).
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<Vec<TaskListingResponse>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Query(query) = query?;
    let listings = state
        .tasks
        .tasks_on_day(query.date.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(listings.iter().map(TaskListingResponse::from).collect()))
}

/// `PUT /api/tasks/{id}`
///
/// The identifier is checked before the task is looked up, and the task is
/// looked up before the body is inspected.
///
/// # Errors
///
/// Returns [`ApiError`] for an invalid id or body (400), an unknown task
/// (404) or store failures (500).
pub async fn update_task_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateTaskStatusBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = TaskId::parse(&raw_id)?;
    state.tasks.find_task(id).await?;
    let Json(body) = payload?;
    let updated = state.tasks.update_completion(id, body.completed).await?;
    Ok(Json(TaskResponse::from(&updated)))
}

/// `DELETE /api/tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for an invalid id (400) or store failures (500).
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let id = TaskId::parse(&raw_id)?;
    state.tasks.delete_task(id).await?;
    Ok(Json(MessageResponse {
        message: "Task deleted successfully",
    }))
}
