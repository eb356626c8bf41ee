//! Shared fixtures for in-memory repository tests.

use std::sync::Arc;

use calendar_tasks::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskTitle, WeekCount},
    services::TaskLifecycleService,
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by in-memory tests.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Provides an empty repository.
#[fixture]
pub fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a service over an empty repository.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds a calendar date.
pub fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, date).expect("valid date")
}

/// Builds a non-recurring draft on `task_day`.
pub fn draft(title: &str, task_day: NaiveDate) -> NewTask {
    NewTask::new(
        TaskTitle::new(title).expect("valid title"),
        task_day,
        "09:00".to_owned(),
        false,
        WeekCount::ONCE,
        None,
    )
}
