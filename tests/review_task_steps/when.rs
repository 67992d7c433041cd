//! When steps for review task generation scenarios.

use std::sync::Arc;

use super::world::{ReviewTaskWorld, run_async};
use crate::test_helpers::FixedClock;
use rstest_bdd_macros::when;
use turnover::review::{domain::UnitReview, services::TaskGenerationService};
use turnover::user::domain::UserId;

fn generate(world: &mut ReviewTaskWorld) -> Result<(), eyre::Report> {
    let recorded_at = world
        .recorded_at
        .ok_or_else(|| eyre::eyre!("missing review time in scenario world"))?;
    let clock = FixedClock(recorded_at);
    let review = UnitReview::new(world.unit_id, UserId::new(), "Fair", &clock)
        .with_observations(world.observations.clone());
    let generator = TaskGenerationService::new(Arc::clone(&world.store), Arc::new(clock));

    world.last_result = Some(run_async(generator.generate_tasks_from_review(&review)));
    Ok(())
}

#[when("repair tasks are generated from the review")]
fn generate_from_review(world: &mut ReviewTaskWorld) -> Result<(), eyre::Report> {
    generate(world)
}

#[when("repair tasks are generated again")]
fn generate_again(world: &mut ReviewTaskWorld) -> Result<(), eyre::Report> {
    generate(world)
}
