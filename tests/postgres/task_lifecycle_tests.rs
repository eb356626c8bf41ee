//! `PostgreSQL` integration tests for calendar task service flows.

use super::helpers::{BoxError, test_schema};
use calendar_tasks::task::{
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, CreatedTasks, TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[ignore = "needs a PostgreSQL server named by CALENDAR_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_recurring_series_is_persisted_and_listed() -> Result<(), BoxError> {
    let schema = test_schema().await?;
    let service = TaskLifecycleService::new(Arc::clone(&schema.repository), Arc::new(DefaultClock));

    let created = service
        .create_task(CreateTaskRequest::new("Standup", "2024-01-01", "09:00").recurring(3, 3))
        .await?;
    let CreatedTasks::Series(series) = created else {
        return Err("expected a series".into());
    };
    assert_eq!(series.weekday().name(), "周三");

    let listed = service.tasks_on_day("2024-01-10").await?;
    assert_eq!(listed.len(), 1);
    let entry = listed.first().ok_or("missing listing")?;
    assert_eq!(entry.task.original_task_id(), series.tasks().first().map(|task| task.id()));
    assert_eq!(entry.weekday, Some(series.weekday()));
    Ok(())
}

#[rstest]
#[ignore = "needs a PostgreSQL server named by CALENDAR_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_completion_and_delete_flow() -> Result<(), BoxError> {
    let schema = test_schema().await?;
    let service = TaskLifecycleService::new(Arc::clone(&schema.repository), Arc::new(DefaultClock));
    let created = service
        .create_task(CreateTaskRequest::new("Report", "2024-01-02", "17:00"))
        .await?;
    let id = created.tasks().first().ok_or("no task created")?.id();

    let completed = service.update_completion(id, true).await?;
    assert!(completed.completed_at().is_some());

    service.delete_task(id).await?;
    service.delete_task(id).await?;

    let result = service.update_completion(id, false).await;
    assert!(matches!(
        result,
        Err(TaskLifecycleError::Repository(TaskRepositoryError::NotFound(_)))
    ));
    Ok(())
}
