//! Repository port for unit review persistence.

use crate::property::domain::UnitId;
use crate::review::domain::{ReviewId, UnitReview};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for review repository operations.
pub type ReviewRepositoryResult<T> = Result<T, ReviewRepositoryError>;

/// Unit review persistence contract.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Stores a new review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRepositoryError::DuplicateReview`] when the review ID
    /// already exists.
    async fn store(&self, review: &UnitReview) -> ReviewRepositoryResult<()>;

    /// Persists changes to an existing review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRepositoryError::NotFound`] when the review does not
    /// exist.
    async fn update(&self, review: &UnitReview) -> ReviewRepositoryResult<()>;

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRepositoryError::NotFound`] when the review does not
    /// exist.
    async fn delete(&self, id: ReviewId) -> ReviewRepositoryResult<()>;

    /// Finds a review by identifier.
    async fn find_by_id(&self, id: ReviewId) -> ReviewRepositoryResult<Option<UnitReview>>;

    /// Returns all reviews in insertion order.
    async fn list_all(&self) -> ReviewRepositoryResult<Vec<UnitReview>>;

    /// Returns all reviews of a unit in insertion order.
    async fn find_by_unit(&self, unit_id: UnitId) -> ReviewRepositoryResult<Vec<UnitReview>>;
}

/// Errors returned by review repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReviewRepositoryError {
    /// A review with the same identifier already exists.
    #[error("duplicate review identifier: {0}")]
    DuplicateReview(ReviewId),

    /// The review was not found.
    #[error("review not found: {0}")]
    NotFound(ReviewId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReviewRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
