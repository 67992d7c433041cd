//! Then steps for review task generation scenarios.

use super::world::{ReviewTaskWorld, parse_date, run_async};
use rstest_bdd_macros::then;
use turnover::review::services::TaskGenerationError;
use turnover::task::{
    domain::{Task, TaskStatus},
    ports::TaskRepository,
};

fn stored_tasks(world: &ReviewTaskWorld) -> Result<Vec<Task>, eyre::Report> {
    run_async(world.store.find_by_unit(world.unit_id))
        .map_err(|err| eyre::eyre!("task lookup failed: {err}"))
}

#[then("generation succeeds")]
fn generation_succeeds(world: &ReviewTaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing generation result in scenario world"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected generation failure: {err}"))?;
    Ok(())
}

#[then("generation stops with {count:usize} task already stored")]
fn generation_stops(world: &ReviewTaskWorld, count: usize) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing generation result in scenario world"))?;
    let Err(TaskGenerationError::Submission { submitted, .. }) = result else {
        return Err(eyre::eyre!("expected generation to fail"));
    };
    if *submitted != count {
        return Err(eyre::eyre!(
            "expected {count} stored task(s) before failure, found {submitted}"
        ));
    }
    Ok(())
}

#[then("the number of stored repair tasks for the unit is {count:usize}")]
fn stored_task_count(world: &ReviewTaskWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = stored_tasks(world)?;
    if stored.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored task(s), found {}",
            stored.len()
        ));
    }
    Ok(())
}

#[then(r#"the task for "{area}" has priority {priority:u32}"#)]
fn task_priority(
    world: &ReviewTaskWorld,
    area: String,
    priority: u32,
) -> Result<(), eyre::Report> {
    let prefix = format!("Repair required for {area} due to");
    let stored = stored_tasks(world)?;
    let task = stored
        .iter()
        .find(|task| task.description().starts_with(&prefix))
        .ok_or_else(|| eyre::eyre!("no stored task for {area}"))?;
    if task.priority().value() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority} for {area}, found {}",
            task.priority()
        ));
    }
    Ok(())
}

#[then("every stored task is pending and unassigned")]
fn tasks_pending_and_unassigned(world: &ReviewTaskWorld) -> Result<(), eyre::Report> {
    let stored = stored_tasks(world)?;
    if let Some(task) = stored
        .iter()
        .find(|task| task.status() != TaskStatus::Pending || task.assigned_to().is_some())
    {
        return Err(eyre::eyre!("task {} is not a fresh pending task", task.id()));
    }
    Ok(())
}

#[then(r#"every stored task is due on "{date}""#)]
fn tasks_due_on(world: &ReviewTaskWorld, date: String) -> Result<(), eyre::Report> {
    let expected = parse_date(&date)?;
    let stored = stored_tasks(world)?;
    if let Some(task) = stored
        .iter()
        .find(|task| task.due_date().date_naive() != expected)
    {
        return Err(eyre::eyre!(
            "task {} is due on {}, expected {expected}",
            task.id(),
            task.due_date().date_naive()
        ));
    }
    Ok(())
}
