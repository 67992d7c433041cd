//! Derivation of repair tasks from review observations.
//!
//! Only observations of [`Severity::High`] or [`Severity::Critical`] produce a
//! task. The mapping here is pure: it builds [`Task`] values but never stores
//! them, so callers decide how and where the derived tasks are submitted.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use mockable::DefaultClock;
//! use turnover::property::domain::UnitId;
//! use turnover::review::domain::{Observation, Severity, UnitReview, repair};
//! use turnover::user::domain::UserId;
//!
//! let review = UnitReview::new(UnitId::new(), UserId::new(), "Fair", &DefaultClock)
//!     .with_observations([
//!         Observation::new("Hall", "Scuff", "Marks on skirting", Severity::Low),
//!         Observation::new("Kitchen", "Leak", "Sink dripping", Severity::High),
//!     ]);
//! let due = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
//!
//! let tasks: Vec<_> = repair::repair_tasks(&review, due).collect();
//! assert_eq!(tasks.len(), 1);
//! assert_eq!(
//!     tasks[0].description(),
//!     "Repair required for Kitchen due to Leak: Sink dripping"
//! );
//! ```

use super::{Observation, Severity, UnitReview};
use crate::property::domain::UnitId;
use crate::task::domain::{NewTask, Task, TaskPriority};
use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

/// Point in time from which a repair task's due date is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateAnchor {
    /// Count from the moment tasks are derived.
    #[default]
    DerivationTime,
    /// Count from the review's own timestamp.
    ReviewedAt,
}

/// Due-date policy for derived repair tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepairSchedule {
    anchor: DueDateAnchor,
    offset_days: u32,
}

impl RepairSchedule {
    /// Calendar days between the anchor and a repair task's due date.
    pub const DEFAULT_OFFSET_DAYS: u32 = 3;

    /// Creates a schedule counting `offset_days` calendar days from `anchor`.
    #[must_use]
    pub const fn new(anchor: DueDateAnchor, offset_days: u32) -> Self {
        Self {
            anchor,
            offset_days,
        }
    }

    /// Returns the anchor the offset is counted from.
    #[must_use]
    pub const fn anchor(self) -> DueDateAnchor {
        self.anchor
    }

    /// Returns the offset in calendar days.
    #[must_use]
    pub const fn offset_days(self) -> u32 {
        self.offset_days
    }

    /// Computes the due date for tasks derived from `review` at `now`.
    ///
    /// Saturates at the latest representable instant rather than
    /// overflowing.
    #[must_use]
    pub fn due_date(self, review: &UnitReview, now: DateTime<Utc>) -> DateTime<Utc> {
        let start = match self.anchor {
            DueDateAnchor::DerivationTime => now,
            DueDateAnchor::ReviewedAt => review.reviewed_at(),
        };
        start
            .checked_add_days(Days::new(u64::from(self.offset_days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for RepairSchedule {
    fn default() -> Self {
        Self::new(DueDateAnchor::DerivationTime, Self::DEFAULT_OFFSET_DAYS)
    }
}

/// Maps a severity to the priority of its repair task.
///
/// Returns `None` for severities that do not warrant a repair task.
#[must_use]
pub const fn repair_priority(severity: Severity) -> Option<TaskPriority> {
    match severity {
        Severity::Critical => Some(TaskPriority::CRITICAL_REPAIR),
        Severity::High => Some(TaskPriority::HIGH_REPAIR),
        Severity::Low | Severity::Medium => None,
    }
}

/// Builds the human-readable description of a repair task.
#[must_use]
pub fn repair_description(observation: &Observation) -> String {
    format!(
        "Repair required for {} due to {}: {}",
        observation.area(),
        observation.issue_type(),
        observation.description()
    )
}

/// Derives the repair task for one observation, if its severity warrants it.
///
/// The task is pending, unassigned, carries a fresh identifier, and relates
/// to `unit_id`.
#[must_use]
pub fn repair_task_for(
    observation: &Observation,
    unit_id: UnitId,
    due_date: DateTime<Utc>,
) -> Option<Task> {
    let priority = repair_priority(observation.severity())?;
    Some(Task::new(NewTask {
        description: repair_description(observation),
        priority,
        due_date,
        related_unit_id: unit_id,
    }))
}

/// Lazily derives repair tasks for a review, in observation order.
pub fn repair_tasks(
    review: &UnitReview,
    due_date: DateTime<Utc>,
) -> impl Iterator<Item = Task> + '_ {
    let unit_id = review.unit_id();
    review
        .observations()
        .iter()
        .filter_map(move |observation| repair_task_for(observation, unit_id, due_date))
}
