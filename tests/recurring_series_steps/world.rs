//! Shared world state for recurring series BDD scenarios.

use std::sync::Arc;

use calendar_tasks::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CreateTaskRequest, CreatedTasks, TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for recurring series behaviour tests.
pub struct SeriesWorld {
    pub service: TestTaskService,
    pub pending_request: Option<CreateTaskRequest>,
    pub last_create_result: Option<Result<CreatedTasks, TaskLifecycleError>>,
}

impl SeriesWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            pending_request: None,
            last_create_result: None,
        }
    }

    /// Returns the tasks from a successful creation.
    ///
    /// # Errors
    ///
    /// Returns an error when no creation ran or it failed.
    pub fn created(&self) -> Result<&CreatedTasks, eyre::Report> {
        self.last_create_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))
    }
}

impl Default for SeriesWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SeriesWorld {
    SeriesWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
