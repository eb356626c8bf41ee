//! Task aggregate root, unpersisted drafts and completion state.

use super::{DayOfWeek, TaskId, TaskTitle, WeekCount};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

/// Completion state of a single task row.
///
/// The completion timestamp exists exactly when the task is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionStatus {
    /// Not yet done.
    Pending,
    /// Done at the recorded instant.
    Completed {
        /// When the task was marked as completed.
        at: DateTime<Utc>,
    },
}

impl CompletionStatus {
    /// Builds the status for a completion flag, stamping completed tasks with
    /// the current clock time.
    #[must_use]
    pub fn from_flag(completed: bool, clock: &impl Clock) -> Self {
        if completed {
            Self::Completed { at: clock.utc() }
        } else {
            Self::Pending
        }
    }

    /// Rebuilds the status from persisted columns.
    ///
    /// Returns `None` when the flag and the timestamp disagree.
    #[must_use]
    pub const fn from_parts(completed: bool, completed_at: Option<DateTime<Utc>>) -> Option<Self> {
        match (completed, completed_at) {
            (false, None) => Some(Self::Pending),
            (true, Some(at)) => Some(Self::Completed { at }),
            _ => None,
        }
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Pending => None,
            Self::Completed { at } => Some(at),
        }
    }
}

/// Task that has not been stored yet and therefore has no identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    task_day: NaiveDate,
    task_day_time: String,
    is_recurring: bool,
    week_count: WeekCount,
    original_task_id: Option<TaskId>,
}

impl NewTask {
    /// Creates a pending task draft.
    #[must_use]
    pub const fn new(
        title: TaskTitle,
        task_day: NaiveDate,
        task_day_time: String,
        is_recurring: bool,
        week_count: WeekCount,
        original_task_id: Option<TaskId>,
    ) -> Self {
        Self {
            title,
            task_day,
            task_day_time,
            is_recurring,
            week_count,
            original_task_id,
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the day the task occurs on.
    #[must_use]
    pub const fn task_day(&self) -> NaiveDate {
        self.task_day
    }

    /// Returns the free-form time label.
    #[must_use]
    pub fn task_day_time(&self) -> &str {
        &self.task_day_time
    }

    /// Returns whether the task belongs to a weekly series.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    /// Returns the number of occurrences in the task's series.
    #[must_use]
    pub const fn week_count(&self) -> WeekCount {
        self.week_count
    }

    /// Returns the original task of the series for generated occurrences.
    #[must_use]
    pub const fn original_task_id(&self) -> Option<TaskId> {
        self.original_task_id
    }

    /// Attaches store-assigned identity and timestamps.
    #[must_use]
    pub fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> Task {
        Task::from_persisted(PersistedTaskData {
            id,
            title: self.title,
            completion: CompletionStatus::Pending,
            task_day: self.task_day,
            task_day_time: self.task_day_time,
            is_recurring: self.is_recurring,
            week_count: self.week_count,
            original_task_id: self.original_task_id,
            created_at,
            updated_at: created_at,
        })
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completion: CompletionStatus,
    task_day: NaiveDate,
    task_day_time: String,
    is_recurring: bool,
    week_count: WeekCount,
    original_task_id: Option<TaskId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted completion state.
    pub completion: CompletionStatus,
    /// Persisted calendar day.
    pub task_day: NaiveDate,
    /// Persisted time label.
    pub task_day_time: String,
    /// Persisted series membership flag.
    pub is_recurring: bool,
    /// Persisted series length.
    pub week_count: WeekCount,
    /// Persisted link to the series original.
    pub original_task_id: Option<TaskId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completion: data.completion,
            task_day: data.task_day,
            task_day_time: data.task_day_time,
            is_recurring: data.is_recurring,
            week_count: data.week_count,
            original_task_id: data.original_task_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn completion(&self) -> CompletionStatus {
        self.completion
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completion.is_completed()
    }

    /// Returns when the task was completed, if it is.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion.completed_at()
    }

    /// Returns the day the task occurs on.
    #[must_use]
    pub const fn task_day(&self) -> NaiveDate {
        self.task_day
    }

    /// Returns the weekday of [`Self::task_day`].
    #[must_use]
    pub fn weekday(&self) -> DayOfWeek {
        DayOfWeek::of(self.task_day)
    }

    /// Returns the free-form time label.
    #[must_use]
    pub fn task_day_time(&self) -> &str {
        &self.task_day_time
    }

    /// Returns whether the task belongs to a weekly series.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    /// Returns the number of occurrences in the task's series.
    #[must_use]
    pub const fn week_count(&self) -> WeekCount {
        self.week_count
    }

    /// Returns the original task of the series for generated occurrences.
    #[must_use]
    pub const fn original_task_id(&self) -> Option<TaskId> {
        self.original_task_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a completion change made by the store at `updated_at`.
    pub const fn apply_completion(&mut self, completion: CompletionStatus, updated_at: DateTime<Utc>) {
        self.completion = completion;
        self.updated_at = updated_at;
    }
}
