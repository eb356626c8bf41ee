//! Repository port for task persistence and lookup.

use crate::task::domain::{CompletionStatus, NewTask, Task, TaskId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations assign identifiers and the `created_at`/`updated_at`
/// timestamps; callers only ever hand in [`NewTask`] drafts.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a single task and returns it with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write fails.
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Stores several tasks as one all-or-nothing batch.
    ///
    /// The returned tasks are in the same order as `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write fails, in
    /// which case none of the tasks is stored.
    async fn store_batch(&self, tasks: Vec<NewTask>) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task whose day equals `day`, ordered by identifier.
    async fn find_by_day(&self, day: NaiveDate) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites the completion fields of one task and refreshes its
    /// `updated_at` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update_completion(
        &self,
        id: TaskId,
        completion: CompletionStatus,
    ) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// Deleting a missing task succeeds; the return value reports whether a
    /// row was removed. Other occurrences of the same series are untouched.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
