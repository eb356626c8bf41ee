//! Domain model for calendar tasks.
//!
//! A task occurs on one calendar day. Recurring tasks are stored as one row
//! per weekly occurrence, the first of which is the series original that all
//! later occurrences point back to.

mod error;
mod ids;
mod schedule;
mod task;

pub use error::TaskDomainError;
pub use ids::{TASK_DAY_FORMAT, TaskId, TaskTitle, parse_task_day};
pub use schedule::{DayOfWeek, Recurrence, SeriesPlan, WeekCount};
pub use task::{CompletionStatus, NewTask, PersistedTaskData, Task};
