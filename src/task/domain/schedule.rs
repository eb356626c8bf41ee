//! Weekly recurrence: weekday alignment and series expansion.

use super::{NewTask, TaskDomainError, TaskId, TaskTitle};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week indexed from Sunday (`0`) to Saturday (`6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayOfWeek(Weekday);

impl DayOfWeek {
    /// Creates a day from its index.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::WeekdayOutOfRange`] unless `index` is in
    /// `0..=6`.
    pub const fn from_index(index: i64) -> Result<Self, TaskDomainError> {
        let weekday = match index {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => return Err(TaskDomainError::WeekdayOutOfRange(index)),
        };
        Ok(Self(weekday))
    }

    /// Returns the day a calendar date falls on.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self(date.weekday())
    }

    /// Returns the Sunday-based index.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self.0 {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        }
    }

    /// Returns the localized display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            Weekday::Sun => "周日",
            Weekday::Mon => "周一",
            Weekday::Tue => "周二",
            Weekday::Wed => "周三",
            Weekday::Thu => "周四",
            Weekday::Fri => "周五",
            Weekday::Sat => "周六",
        }
    }

    /// Days to move forward from `self` to reach `target`, in `0..=6`.
    #[must_use]
    pub fn days_until(self, target: Self) -> u8 {
        let delta = i16::from(target.index()) - i16::from(self.index());
        u8::try_from(delta.rem_euclid(7)).unwrap_or_default()
    }

    /// Returns the first date on or after `date` that falls on `self`.
    ///
    /// Returns `None` when the shifted date is not representable.
    #[must_use]
    pub fn align(self, date: NaiveDate) -> Option<NaiveDate> {
        let shift = Self::of(date).days_until(self);
        date.checked_add_days(Days::new(u64::from(shift)))
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(value: DayOfWeek) -> Self {
        value.index()
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of weekly occurrences in a series, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekCount(u32);

impl WeekCount {
    /// Occurrence count used when a recurring request gives none.
    pub const DEFAULT_RECURRING: Self = Self(4);

    /// A single occurrence.
    pub const ONCE: Self = Self(1);

    /// Largest accepted occurrence count (ten years of weeks).
    pub const MAX: u32 = 520;

    /// Resolves the requested count of a recurring task.
    ///
    /// Non-positive requests fall back to [`Self::DEFAULT_RECURRING`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::WeekCountTooLarge`] above [`Self::MAX`].
    pub fn for_recurring(requested: i64) -> Result<Self, TaskDomainError> {
        if requested <= 0 {
            return Ok(Self::DEFAULT_RECURRING);
        }
        u32::try_from(requested)
            .ok()
            .filter(|count| *count <= Self::MAX)
            .map(Self)
            .ok_or(TaskDomainError::WeekCountTooLarge {
                requested,
                max: Self::MAX,
            })
    }

    /// Wraps a persisted count.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub const fn from_persisted(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the count.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WeekCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recurrence settings of a task draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// A single, non-recurring task.
    Once,
    /// A weekly series on `weekday` with `week_count` occurrences.
    Weekly {
        /// Day every occurrence falls on.
        weekday: DayOfWeek,
        /// Number of occurrences, the original included.
        week_count: WeekCount,
    },
}

/// Validated plan for the rows a creation request materialises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPlan {
    title: TaskTitle,
    start_date: NaiveDate,
    task_day_time: String,
    recurrence: Recurrence,
}

impl SeriesPlan {
    /// Builds a plan, moving recurring series forward onto their weekday.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingTaskDayTime`] when the time label is
    /// blank, or [`TaskDomainError::DateOutOfRange`] when an occurrence would
    /// fall outside the supported calendar.
    pub fn new(
        title: TaskTitle,
        task_day: NaiveDate,
        task_day_time: impl Into<String>,
        recurrence: Recurrence,
    ) -> Result<Self, TaskDomainError> {
        let time = task_day_time.into();
        if time.trim().is_empty() {
            return Err(TaskDomainError::MissingTaskDayTime);
        }
        let out_of_range = || TaskDomainError::DateOutOfRange(task_day);
        let start_date = match recurrence {
            Recurrence::Once => task_day,
            Recurrence::Weekly { weekday, week_count } => {
                let start = weekday.align(task_day).ok_or_else(out_of_range)?;
                occurrence_day(start, week_count.value() - 1).ok_or_else(out_of_range)?;
                start
            }
        };
        Ok(Self {
            title,
            start_date,
            task_day_time: time,
            recurrence,
        })
    }

    /// Returns the (possibly shifted) date of the first occurrence.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the recurrence settings.
    #[must_use]
    pub const fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    /// Returns the number of rows the plan produces.
    #[must_use]
    pub const fn week_count(&self) -> WeekCount {
        match self.recurrence {
            Recurrence::Once => WeekCount::ONCE,
            Recurrence::Weekly { week_count, .. } => week_count,
        }
    }

    /// Returns the draft of the original task.
    #[must_use]
    pub fn original(&self) -> NewTask {
        NewTask::new(
            self.title.clone(),
            self.start_date,
            self.task_day_time.clone(),
            matches!(self.recurrence, Recurrence::Weekly { .. }),
            self.week_count(),
            None,
        )
    }

    /// Returns drafts for occurrences two through `week_count`, each linked
    /// to `original_id`.
    ///
    /// Empty for non-recurring plans and single-week series.
    #[must_use]
    pub fn follow_ups(&self, original_id: TaskId) -> Vec<NewTask> {
        let Recurrence::Weekly { week_count, .. } = self.recurrence else {
            return Vec::new();
        };
        (1..week_count.value())
            .filter_map(|week| {
                let day = occurrence_day(self.start_date, week)?;
                Some(NewTask::new(
                    self.title.clone(),
                    day,
                    self.task_day_time.clone(),
                    true,
                    week_count,
                    Some(original_id),
                ))
            })
            .collect()
    }
}

/// Date of the occurrence `week` weeks after `start`.
fn occurrence_day(start: NaiveDate, week: u32) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(week) * 7))
}
