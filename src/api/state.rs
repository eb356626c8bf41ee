//! Shared state handed to every request handler.

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use mockable::Clock;

/// Router state holding the task service.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Calendar task service.
    pub tasks: TaskLifecycleService<R, C>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task service.
    #[must_use]
    pub const fn new(tasks: TaskLifecycleService<R, C>) -> Self {
        Self { tasks }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}
