//! End-to-end turnover workflow over in-memory stores.

use std::sync::Arc;

use super::helpers::clock;
use crate::test_helpers::FixedClock;
use rstest::rstest;
use turnover::property::{
    adapters::memory::InMemoryPropertyRepository,
    services::{AddUnitRequest, PropertyService},
};
use turnover::question::{
    adapters::memory::InMemoryQuestionRepository, services::QuestionQueueService,
};
use turnover::review::{
    adapters::memory::InMemoryReviewRepository,
    domain::{Observation, Severity},
    services::{ReviewService, SubmitReviewRequest, TaskGenerationService},
};
use turnover::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskStatus, services::TaskLifecycleService,
};
use turnover::user::{
    adapters::memory::InMemoryUserRepository,
    services::{AddUserRequest, UserService},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unit_is_reviewed_repaired_and_closed_out(
    clock: Result<FixedClock, eyre::Report>,
) -> Result<(), eyre::Report> {
    let now = Arc::new(clock?);
    let properties = PropertyService::new(
        Arc::new(InMemoryPropertyRepository::new()),
        Arc::clone(&now),
    );
    let users = UserService::new(Arc::new(InMemoryUserRepository::new()));
    let reviews = ReviewService::new(
        Arc::new(InMemoryReviewRepository::new()),
        Arc::clone(&now),
    );
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let generator = TaskGenerationService::new(Arc::clone(&task_store), Arc::clone(&now));
    let tasks = TaskLifecycleService::new(Arc::clone(&task_store));

    let property = properties.add_property("12 Harbour Road", 1).await?;
    let unit = properties
        .add_unit(property.id(), AddUnitRequest::new("1A").with_condition("Vacated"))
        .await?;
    let reviewer = users
        .add_user(AddUserRequest::new("Dana", "dana@example.com", "reviewer"))
        .await?;
    let technician = users
        .add_user(AddUserRequest::new("Sam", "sam@example.com", "maintenance"))
        .await?;

    let request = SubmitReviewRequest::new(unit.id(), reviewer.id(), "Fair").with_observations([
        Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High),
        Observation::new("Bedroom", "Paint", "Faded wall", Severity::Low),
    ]);
    let (_, created) = reviews
        .submit_review_and_generate_tasks(request, &generator)
        .await?;
    let reviewed_unit = properties.mark_unit_reviewed(property.id(), unit.id()).await?;
    eyre::ensure!(reviewed_unit.has_review(), "unit should be flagged as reviewed");

    let repair = created
        .first()
        .ok_or_else(|| eyre::eyre!("expected one repair task"))?;
    tasks.assign_task(repair.id(), technician.id()).await?;
    let completed = tasks.complete_task(repair.id()).await?;

    eyre::ensure!(
        completed.status() == TaskStatus::Completed,
        "repair should be completed"
    );
    eyre::ensure!(
        completed.assigned_to() == Some(technician.id()),
        "repair should stay assigned to the technician"
    );
    let open: Vec<_> = tasks
        .tasks_for_unit(unit.id())
        .await?
        .into_iter()
        .filter(|task| task.status() == TaskStatus::Pending)
        .collect();
    eyre::ensure!(open.is_empty(), "no repair work should remain open");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn questions_raised_during_turnover_are_answered_and_archived() -> Result<(), eyre::Report> {
    let questions = QuestionQueueService::new(Arc::new(InMemoryQuestionRepository::new()));

    let question = questions.add_question("Who holds the spare keys?").await?;
    questions.prioritize_question(question.id(), 1).await?;
    questions
        .respond_to_question(question.id(), "The concierge")
        .await?;
    let archived = questions.archive_question(question.id()).await?;

    eyre::ensure!(archived.is_archived(), "question should be archived");
    eyre::ensure!(
        archived.response() == Some("The concierge"),
        "response should be kept"
    );
    eyre::ensure!(
        questions.retrieve_questions().await? == vec![archived],
        "archived questions stay listed"
    );
    Ok(())
}
