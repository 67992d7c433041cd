//! In-memory repository for unit reviews.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::property::domain::UnitId;
use crate::review::{
    domain::{ReviewId, UnitReview},
    ports::{ReviewRepository, ReviewRepositoryError, ReviewRepositoryResult},
};

/// Thread-safe in-memory review repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewRepository {
    state: Arc<RwLock<InMemoryReviewState>>,
}

#[derive(Debug, Default)]
struct InMemoryReviewState {
    reviews: HashMap<ReviewId, UnitReview>,
    insertion_order: Vec<ReviewId>,
}

impl InMemoryReviewState {
    fn ordered(&self) -> impl Iterator<Item = &UnitReview> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.reviews.get(id))
    }
}

impl InMemoryReviewRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn store(&self, review: &UnitReview) -> ReviewRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.reviews.contains_key(&review.id()) {
            return Err(ReviewRepositoryError::DuplicateReview(review.id()));
        }
        state.insertion_order.push(review.id());
        state.reviews.insert(review.id(), review.clone());
        Ok(())
    }

    async fn update(&self, review: &UnitReview) -> ReviewRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .reviews
            .get_mut(&review.id())
            .ok_or(ReviewRepositoryError::NotFound(review.id()))?;
        *stored = review.clone();
        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> ReviewRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.reviews.remove(&id).is_none() {
            return Err(ReviewRepositoryError::NotFound(id));
        }
        state.insertion_order.retain(|stored_id| *stored_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: ReviewId) -> ReviewRepositoryResult<Option<UnitReview>> {
        let state = self.state.read().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.reviews.get(&id).cloned())
    }

    async fn list_all(&self) -> ReviewRepositoryResult<Vec<UnitReview>> {
        let state = self.state.read().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.ordered().cloned().collect())
    }

    async fn find_by_unit(&self, unit_id: UnitId) -> ReviewRepositoryResult<Vec<UnitReview>> {
        let state = self.state.read().map_err(|err| {
            ReviewRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .ordered()
            .filter(|review| review.unit_id() == unit_id)
            .cloned()
            .collect())
    }
}
