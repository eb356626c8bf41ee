//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty or only whitespace.
    #[error("title must not be empty")]
    EmptyTitle,

    /// No task day was supplied.
    #[error("task_day is required")]
    MissingTaskDay,

    /// The task time label is empty after trimming.
    #[error("task_day_time is required")]
    MissingTaskDayTime,

    /// A date query was issued without a date.
    #[error("date parameter is required")]
    MissingDate,

    /// The date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date format")]
    InvalidDate(String),

    /// A series occurrence would fall outside the supported calendar range.
    #[error("task_day {0} cannot be scheduled")]
    DateOutOfRange(NaiveDate),

    /// The task identifier is not a positive integer.
    #[error("invalid task id")]
    InvalidTaskId(String),

    /// The weekday index lies outside `0..=6`.
    #[error("weekday {0} is out of range, expected 0-6")]
    WeekdayOutOfRange(i64),

    /// The requested number of weekly occurrences exceeds the supported limit.
    #[error("week_count {requested} exceeds the maximum of {max}")]
    WeekCountTooLarge {
        /// Requested occurrence count.
        requested: i64,
        /// Largest accepted occurrence count.
        max: u32,
    },
}
