//! Application services for calendar task orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, CreatedTasks, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService, TaskListing, TaskSeries,
};
