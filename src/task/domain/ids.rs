//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier for a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is not
    /// positive.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidTaskId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a task identifier from a path segment.
    ///
    /// Only plain decimal digits are accepted, so signs, whitespace and
    /// zero are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the text is not a
    /// positive integer that fits in 64 bits.
    pub fn parse(raw: &str) -> Result<Self, TaskDomainError> {
        let invalid = || TaskDomainError::InvalidTaskId(raw.to_owned());
        if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = raw.parse::<i64>().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task title that is not blank. The text is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty or
    /// only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Date format used on the wire and in error messages.
pub const TASK_DAY_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDate`] when the text is not a valid
/// calendar date in that format. Unpadded fields and signed years are
/// rejected: the date must format back to exactly `raw`.
pub fn parse_task_day(raw: &str) -> Result<NaiveDate, TaskDomainError> {
    let invalid = || TaskDomainError::InvalidDate(raw.to_owned());
    let day = NaiveDate::parse_from_str(raw, TASK_DAY_FORMAT).map_err(|_| invalid())?;
    if day.format(TASK_DAY_FORMAT).to_string() != raw {
        return Err(invalid());
    }
    Ok(day)
}
