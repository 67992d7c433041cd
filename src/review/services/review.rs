//! Service layer for unit review submission and maintenance.

use super::task_generation::{TaskGenerationError, TaskGenerationService};
use crate::property::domain::UnitId;
use crate::review::{
    domain::{Observation, ReviewId, UnitReview},
    ports::{ReviewRepository, ReviewRepositoryError},
};
use crate::task::{domain::Task, ports::TaskRepository};
use crate::user::domain::UserId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Request payload for submitting a unit review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReviewRequest {
    unit_id: UnitId,
    reviewer_id: UserId,
    overall_condition: String,
    observations: Vec<Observation>,
    photo_urls: Vec<String>,
    notes: Option<String>,
}

impl SubmitReviewRequest {
    /// Creates a request with the required review fields.
    #[must_use]
    pub fn new(
        unit_id: UnitId,
        reviewer_id: UserId,
        overall_condition: impl Into<String>,
    ) -> Self {
        Self {
            unit_id,
            reviewer_id,
            overall_condition: overall_condition.into(),
            observations: Vec::new(),
            photo_urls: Vec::new(),
            notes: None,
        }
    }

    /// Sets the observations in recorded order.
    #[must_use]
    pub fn with_observations(
        mut self,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Self {
        self.observations = observations.into_iter().collect();
        self
    }

    /// Sets photo references.
    #[must_use]
    pub fn with_photo_urls(mut self, photo_urls: impl IntoIterator<Item = String>) -> Self {
        self.photo_urls = photo_urls.into_iter().collect();
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update applied to an existing review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    overall_condition: Option<String>,
    observations: Option<Vec<Observation>>,
    photo_urls: Option<Vec<String>>,
    notes: Option<String>,
}

impl ReviewUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement overall condition label.
    #[must_use]
    pub fn with_overall_condition(mut self, overall_condition: impl Into<String>) -> Self {
        self.overall_condition = Some(overall_condition.into());
        self
    }

    /// Sets replacement observations.
    #[must_use]
    pub fn with_observations(
        mut self,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Self {
        self.observations = Some(observations.into_iter().collect());
        self
    }

    /// Sets replacement photo references.
    #[must_use]
    pub fn with_photo_urls(mut self, photo_urls: impl IntoIterator<Item = String>) -> Self {
        self.photo_urls = Some(photo_urls.into_iter().collect());
        self
    }

    /// Sets replacement notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Service-level errors for review operations.
#[derive(Debug, Error)]
pub enum ReviewServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ReviewRepositoryError),
    /// The review was stored but repair task generation failed.
    #[error(transparent)]
    TaskGeneration(#[from] TaskGenerationError),
}

/// Result type for review service operations.
pub type ReviewServiceResult<T> = Result<T, ReviewServiceError>;

/// Unit review orchestration service.
#[derive(Clone)]
pub struct ReviewService<R, C>
where
    R: ReviewRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ReviewService<R, C>
where
    R: ReviewRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new review service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Records a review stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when the repository rejects
    /// persistence.
    #[instrument(skip_all, fields(unit_id = %request.unit_id, reviewer_id = %request.reviewer_id))]
    pub async fn submit_review(
        &self,
        request: SubmitReviewRequest,
    ) -> ReviewServiceResult<UnitReview> {
        let SubmitReviewRequest {
            unit_id,
            reviewer_id,
            overall_condition,
            observations,
            photo_urls,
            notes,
        } = request;

        let mut review = UnitReview::new(unit_id, reviewer_id, overall_condition, &*self.clock)
            .with_observations(observations)
            .with_photo_urls(photo_urls);
        if let Some(text) = notes {
            review = review.with_notes(text);
        }
        self.repository.store(&review).await?;
        info!(review_id = %review.id(), "review submitted");
        Ok(review)
    }

    /// Records a review, then generates repair tasks from it.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when the review cannot be
    /// stored, in which case no tasks are generated, or
    /// [`ReviewServiceError::TaskGeneration`] when a derived task is
    /// rejected. In the latter case the review remains stored.
    pub async fn submit_review_and_generate_tasks<T, G>(
        &self,
        request: SubmitReviewRequest,
        generator: &TaskGenerationService<T, G>,
    ) -> ReviewServiceResult<(UnitReview, Vec<Task>)>
    where
        T: TaskRepository,
        G: Clock + Send + Sync,
    {
        let review = self.submit_review(request).await?;
        let tasks = generator.generate_tasks_from_review(&review).await?;
        Ok((review, tasks))
    }

    /// Lists all reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn retrieve_all_reviews(&self) -> ReviewServiceResult<Vec<UnitReview>> {
        Ok(self.repository.list_all().await?)
    }

    /// Lists the reviews of one unit.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn reviews_for_unit(&self, unit_id: UnitId) -> ReviewServiceResult<Vec<UnitReview>> {
        Ok(self.repository.find_by_unit(unit_id).await?)
    }

    /// Retrieves a single review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_review(&self, id: ReviewId) -> ReviewServiceResult<Option<UnitReview>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Applies a partial update to an existing review.
    ///
    /// Updating a review never generates or withdraws tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when the review does not
    /// exist.
    #[instrument(skip_all, fields(review_id = %id))]
    pub async fn update_review(
        &self,
        id: ReviewId,
        update: ReviewUpdate,
    ) -> ReviewServiceResult<UnitReview> {
        let mut review = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ReviewRepositoryError::NotFound(id))?;
        if let Some(overall_condition) = update.overall_condition {
            review.revise_condition(overall_condition);
        }
        if let Some(observations) = update.observations {
            review.replace_observations(observations);
        }
        if let Some(photo_urls) = update.photo_urls {
            review.replace_photo_urls(photo_urls);
        }
        if let Some(notes) = update.notes {
            review.set_notes(notes);
        }
        self.repository.update(&review).await?;
        Ok(review)
    }

    /// Deletes a review. Tasks generated from it are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewServiceError::Repository`] when the review does not
    /// exist.
    #[instrument(skip_all, fields(review_id = %id))]
    pub async fn delete_review(&self, id: ReviewId) -> ReviewServiceResult<()> {
        self.repository.delete(id).await?;
        info!("review deleted");
        Ok(())
    }
}
