//! In-memory integration tests for review-driven task generation.

use super::helpers::{Harness, clock};
use crate::test_helpers::{FixedClock, utc};
use rstest::rstest;
use turnover::property::domain::UnitId;
use turnover::review::{
    domain::{DueDateAnchor, Observation, RepairSchedule, Severity},
    services::SubmitReviewRequest,
};
use turnover::task::{domain::TaskStatus, ports::TaskRepository};
use turnover::user::domain::UserId;

fn mixed_observations() -> Vec<Observation> {
    vec![
        Observation::new("Hall", "Scuff", "Marks on skirting", Severity::Low),
        Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High),
        Observation::new("Bathroom", "Mold", "Visible mold", Severity::Critical),
    ]
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mixed_review_produces_prioritized_repair_tasks(
    clock: Result<FixedClock, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = Harness::at(clock?);
    let unit_id = UnitId::new();
    let request = SubmitReviewRequest::new(unit_id, UserId::new(), "Fair")
        .with_observations(mixed_observations());

    let (_, created) = harness
        .reviews
        .submit_review_and_generate_tasks(request, &harness.generator)
        .await?;
    let stored = harness.tasks.find_by_unit(unit_id).await?;

    eyre::ensure!(stored == created, "stored tasks should match the returned tasks");
    let summary: Vec<(u32, &str)> = stored
        .iter()
        .map(|task| (task.priority().value(), task.description()))
        .collect();
    eyre::ensure!(
        summary
            == vec![
                (2, "Repair required for Kitchen due to Leak: Sink dripping"),
                (1, "Repair required for Bathroom due to Mold: Visible mold"),
            ],
        "unexpected tasks: {summary:?}"
    );
    let due = utc(2024, 2, 3, 8, 0)?;
    for task in &stored {
        eyre::ensure!(task.status() == TaskStatus::Pending, "task should be pending");
        eyre::ensure!(task.assigned_to().is_none(), "task should be unassigned");
        eyre::ensure!(task.due_date() == due, "due date should roll into February");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_without_qualifying_observations_creates_nothing(
    clock: Result<FixedClock, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = Harness::at(clock?);
    let request = SubmitReviewRequest::new(UnitId::new(), UserId::new(), "Good")
        .with_observations([Observation::new(
            "Hall",
            "Scuff",
            "Marks on skirting",
            Severity::Medium,
        )]);

    let (review, created) = harness
        .reviews
        .submit_review_and_generate_tasks(request, &harness.generator)
        .await?;

    eyre::ensure!(created.is_empty(), "no tasks should be created");
    eyre::ensure!(
        harness.tasks.list_all().await?.is_empty(),
        "task store should stay empty"
    );
    eyre::ensure!(
        harness.reviews.find_review(review.id()).await?.is_some(),
        "review should still be stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn regenerating_from_a_stored_review_duplicates_tasks(
    clock: Result<FixedClock, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = Harness::at(clock?);
    let review = harness
        .reviews
        .submit_review(
            SubmitReviewRequest::new(UnitId::new(), UserId::new(), "Fair")
                .with_observations(mixed_observations()),
        )
        .await?;

    harness.generator.generate_tasks_from_review(&review).await?;
    harness.generator.generate_tasks_from_review(&review).await?;

    let stored = harness.tasks.find_by_unit(review.unit_id()).await?;
    eyre::ensure!(stored.len() == 4, "expected two full task sets, found {}", stored.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn derivation_is_pure_until_submitted(
    clock: Result<FixedClock, eyre::Report>,
) -> Result<(), eyre::Report> {
    let harness = Harness::at(clock?);
    let review = harness
        .reviews
        .submit_review(
            SubmitReviewRequest::new(UnitId::new(), UserId::new(), "Fair")
                .with_observations(mixed_observations()),
        )
        .await?;

    let derived = harness.generator.derive_tasks(&review).count();

    eyre::ensure!(derived == 2, "expected two derived tasks, found {derived}");
    eyre::ensure!(
        harness.tasks.list_all().await?.is_empty(),
        "deriving must not store tasks"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reviewed_at_schedule_ignores_derivation_time() -> Result<(), eyre::Report> {
    let review_clock = FixedClock(utc(2023, 12, 30, 18, 0)?);
    let harness = Harness::at(review_clock);
    let review = harness
        .reviews
        .submit_review(
            SubmitReviewRequest::new(UnitId::new(), UserId::new(), "Poor")
                .with_observations(mixed_observations()),
        )
        .await?;
    let late_generator = turnover::review::services::TaskGenerationService::new(
        std::sync::Arc::clone(&harness.tasks),
        std::sync::Arc::new(FixedClock(utc(2024, 3, 1, 0, 0)?)),
    )
    .with_schedule(RepairSchedule::new(DueDateAnchor::ReviewedAt, 3));

    let created = late_generator.generate_tasks_from_review(&review).await?;

    let expected = utc(2024, 1, 2, 18, 0)?;
    eyre::ensure!(
        created.iter().all(|task| task.due_date() == expected),
        "due dates should count from the review timestamp"
    );
    Ok(())
}
