//! Given steps for recurring series BDD scenarios.

use super::world::SeriesWorld;
use calendar_tasks::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given(
    r#"a recurring task "{title}" from "{task_day}" at "{time}" on weekday {weekday:i64} for {weeks:i64} weeks"#
)]
#[expect(
    clippy::too_many_arguments,
    reason = "Step definition captures every request field from a single step"
)]
fn recurring_task_request(
    world: &mut SeriesWorld,
    title: String,
    task_day: String,
    time: String,
    weekday: i64,
    weeks: i64,
) {
    world.pending_request =
        Some(CreateTaskRequest::new(title, task_day, time).recurring(weekday, weeks));
}
