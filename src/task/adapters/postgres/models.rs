//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Calendar day.
    pub task_day: NaiveDate,
    /// Time label.
    pub task_day_time: String,
    /// Series membership flag.
    pub is_recurring: bool,
    /// Series length.
    pub week_count: i32,
    /// Series original.
    pub original_task_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
///
/// Identifiers and timestamps are left to column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Calendar day.
    pub task_day: NaiveDate,
    /// Time label.
    pub task_day_time: String,
    /// Series membership flag.
    pub is_recurring: bool,
    /// Series length.
    pub week_count: i32,
    /// Series original.
    pub original_task_id: Option<i64>,
}
