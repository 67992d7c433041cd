//! Tests for the pure observation-to-task derivation rule.

use crate::property::domain::UnitId;
use crate::review::domain::{
    DueDateAnchor, Observation, RepairSchedule, Severity, UnitReview, repair,
};
use crate::task::domain::{TaskPriority, TaskStatus};
use crate::test_support::{FixedClock, utc};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn due_date() -> DateTime<Utc> {
    utc(2024, 6, 4, 9, 0)
}

fn review_with(observations: Vec<Observation>) -> UnitReview {
    UnitReview::new(
        UnitId::new(),
        UserId::new(),
        "Fair",
        &FixedClock::at(2024, 6, 1, 9, 0),
    )
    .with_observations(observations)
}

#[rstest]
#[case(Severity::Low, None)]
#[case(Severity::Medium, None)]
#[case(Severity::High, Some(TaskPriority::HIGH_REPAIR))]
#[case(Severity::Critical, Some(TaskPriority::CRITICAL_REPAIR))]
fn repair_priority_maps_severity(
    #[case] severity: Severity,
    #[case] expected: Option<TaskPriority>,
) {
    assert_eq!(repair::repair_priority(severity), expected);
}

#[rstest]
fn repair_priority_values_are_one_and_two() {
    assert_eq!(TaskPriority::CRITICAL_REPAIR.value(), 1);
    assert_eq!(TaskPriority::HIGH_REPAIR.value(), 2);
}

#[rstest]
#[case(Severity::Low)]
#[case(Severity::Medium)]
fn low_and_medium_observations_produce_no_task(
    #[case] severity: Severity,
    due_date: DateTime<Utc>,
) {
    let observation = Observation::new("Hall", "Scuff", "Marks on skirting", severity);
    assert!(repair::repair_task_for(&observation, UnitId::new(), due_date).is_none());
}

#[rstest]
fn qualifying_observation_produces_pending_unassigned_task(due_date: DateTime<Utc>) {
    let unit_id = UnitId::new();
    let observation = Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High);

    let task = repair::repair_task_for(&observation, unit_id, due_date)
        .expect("high severity yields a task");

    assert_eq!(
        task.description(),
        "Repair required for Kitchen due to Leak: Sink dripping"
    );
    assert_eq!(task.priority(), TaskPriority::HIGH_REPAIR);
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.status().as_str(), "Pending");
    assert_eq!(task.assigned_to(), None);
    assert_eq!(task.due_date(), due_date);
    assert_eq!(task.related_unit_id(), unit_id);
}

#[rstest]
fn mixed_review_yields_tasks_in_observation_order(due_date: DateTime<Utc>) {
    let review = review_with(vec![
        Observation::new("Hall", "Scuff", "Marks on skirting", Severity::Low),
        Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High),
        Observation::new("Bathroom", "Mold", "Visible mold", Severity::Critical),
    ]);

    let tasks: Vec<_> = repair::repair_tasks(&review, due_date).collect();

    let summary: Vec<(u32, &str)> = tasks
        .iter()
        .map(|task| (task.priority().value(), task.description()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (2, "Repair required for Kitchen due to Leak: Sink dripping"),
            (1, "Repair required for Bathroom due to Mold: Visible mold"),
        ]
    );
    assert!(
        tasks
            .iter()
            .all(|task| task.related_unit_id() == review.unit_id())
    );
}

#[rstest]
fn review_without_observations_yields_nothing(due_date: DateTime<Utc>) {
    let review = review_with(Vec::new());
    assert_eq!(repair::repair_tasks(&review, due_date).count(), 0);
}

#[rstest]
fn derived_tasks_receive_distinct_identifiers(due_date: DateTime<Utc>) {
    let review = review_with(vec![
        Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High),
        Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High),
    ]);

    let tasks: Vec<_> = repair::repair_tasks(&review, due_date).collect();

    assert_eq!(tasks.len(), 2);
    assert_ne!(
        tasks.first().map(|task| task.id()),
        tasks.get(1).map(|task| task.id())
    );
}

#[rstest]
#[case(utc(2024, 1, 30, 10, 15), utc(2024, 2, 2, 10, 15))]
#[case(utc(2024, 1, 31, 23, 59), utc(2024, 2, 3, 23, 59))]
#[case(utc(2023, 4, 30, 8, 0), utc(2023, 5, 3, 8, 0))]
#[case(utc(2023, 12, 30, 12, 0), utc(2024, 1, 2, 12, 0))]
#[case(utc(2023, 12, 31, 0, 0), utc(2024, 1, 3, 0, 0))]
#[case(utc(2024, 2, 28, 6, 0), utc(2024, 3, 2, 6, 0))]
#[case(utc(2023, 2, 27, 6, 0), utc(2023, 3, 2, 6, 0))]
fn default_schedule_adds_three_calendar_days(
    #[case] now: DateTime<Utc>,
    #[case] expected: DateTime<Utc>,
) {
    let review = review_with(Vec::new());
    assert_eq!(RepairSchedule::default().due_date(&review, now), expected);
}

#[rstest]
fn reviewed_at_anchor_counts_from_review_timestamp() {
    let review = review_with(Vec::new());
    let schedule = RepairSchedule::new(DueDateAnchor::ReviewedAt, 3);

    let due = schedule.due_date(&review, utc(2024, 6, 20, 0, 0));

    assert_eq!(due, utc(2024, 6, 4, 9, 0));
}

#[rstest]
fn due_date_saturates_instead_of_overflowing() {
    let review = review_with(Vec::new());
    let schedule = RepairSchedule::new(DueDateAnchor::DerivationTime, 3);

    let due = schedule.due_date(&review, DateTime::<Utc>::MAX_UTC);

    assert_eq!(due, DateTime::<Utc>::MAX_UTC);
}
