//! Service layer for generating repair tasks from submitted reviews.
//!
//! Derived tasks are submitted to the task store one at a time, in
//! observation order, each write awaited before the next is issued. The
//! first failed write ends the run. Writes acknowledged before the failure
//! stay in the store, and running the same review twice stores two
//! independent sets of tasks.

use crate::review::domain::{RepairSchedule, UnitReview, repair};
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors returned while generating tasks from a review.
#[derive(Debug, Error)]
pub enum TaskGenerationError {
    /// The task store rejected a derived task.
    #[error("task submission failed after {submitted} repair task(s) were stored: {source}")]
    Submission {
        /// Number of tasks stored before the failing write.
        submitted: usize,
        /// Underlying store failure.
        #[source]
        source: TaskRepositoryError,
    },
}

impl TaskGenerationError {
    /// Returns the number of tasks stored before the failure.
    #[must_use]
    pub const fn submitted(&self) -> usize {
        match self {
            Self::Submission { submitted, .. } => *submitted,
        }
    }
}

/// Result type for task generation operations.
pub type TaskGenerationResult<T> = Result<T, TaskGenerationError>;

/// Review-to-task derivation and submission service.
#[derive(Clone)]
pub struct TaskGenerationService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    clock: Arc<C>,
    schedule: RepairSchedule,
}

impl<T, C> TaskGenerationService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default repair schedule.
    #[must_use]
    pub fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            clock,
            schedule: RepairSchedule::default(),
        }
    }

    /// Replaces the repair schedule.
    #[must_use]
    pub const fn with_schedule(mut self, schedule: RepairSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Returns the repair schedule in use.
    #[must_use]
    pub const fn schedule(&self) -> RepairSchedule {
        self.schedule
    }

    /// Lazily derives the repair tasks for `review` without storing them.
    ///
    /// The due date is fixed when this method is called.
    pub fn derive_tasks<'a>(&self, review: &'a UnitReview) -> impl Iterator<Item = Task> + 'a {
        let due_date = self.schedule.due_date(review, self.clock.utc());
        repair::repair_tasks(review, due_date)
    }

    /// Derives repair tasks for `review` and submits them to the task store.
    ///
    /// Returns the stored tasks in observation order. A review without
    /// qualifying observations stores nothing and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGenerationError::Submission`] for the first rejected
    /// write. Remaining observations are not processed and tasks already
    /// stored are not removed.
    #[instrument(skip_all, fields(review_id = %review.id(), unit_id = %review.unit_id()))]
    pub async fn generate_tasks_from_review(
        &self,
        review: &UnitReview,
    ) -> TaskGenerationResult<Vec<Task>> {
        let mut stored = Vec::new();
        for task in self.derive_tasks(review) {
            if let Err(source) = self.tasks.store(&task).await {
                warn!(submitted = stored.len(), error = %source, "repair task submission failed");
                return Err(TaskGenerationError::Submission {
                    submitted: stored.len(),
                    source,
                });
            }
            info!(
                task_id = %task.id(),
                priority = task.priority().value(),
                "repair task submitted"
            );
            stored.push(task);
        }
        info!(
            observations = review.observations().len(),
            created = stored.len(),
            "review task generation finished"
        );
        Ok(stored)
    }
}
