//! When steps for recurring series BDD scenarios.

use super::world::{SeriesWorld, run_async};
use calendar_tasks::task::domain::Task;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the task is created")]
fn create_task(world: &mut SeriesWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;

    world.last_create_result = Some(run_async(world.service.create_task(request)));
    Ok(())
}

#[when("occurrence {position:usize} is marked as completed")]
fn complete_occurrence(world: &mut SeriesWorld, position: usize) -> Result<(), eyre::Report> {
    let id = world
        .created()?
        .tasks()
        .get(position.saturating_sub(1))
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("series has no occurrence {position}"))?;

    run_async(world.service.update_completion(id, true)).wrap_err("complete occurrence")?;
    Ok(())
}
