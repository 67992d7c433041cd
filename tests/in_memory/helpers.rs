//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::FixedClock;
use rstest::fixture;
use turnover::review::{
    adapters::memory::InMemoryReviewRepository,
    services::{ReviewService, TaskGenerationService},
};
use turnover::task::adapters::memory::InMemoryTaskRepository;

/// Review service backed by in-memory storage.
pub type TestReviewService = ReviewService<InMemoryReviewRepository, FixedClock>;

/// Task generation service backed by in-memory storage.
pub type TestGenerator = TaskGenerationService<InMemoryTaskRepository, FixedClock>;

/// Review and task services sharing one task store.
pub struct Harness {
    pub reviews: TestReviewService,
    pub generator: TestGenerator,
    pub tasks: Arc<InMemoryTaskRepository>,
}

impl Harness {
    /// Builds a harness whose clock reads `now`.
    pub fn at(now: FixedClock) -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        Self {
            reviews: ReviewService::new(Arc::new(InMemoryReviewRepository::new()), Arc::new(now)),
            generator: TaskGenerationService::new(Arc::clone(&tasks), Arc::new(now)),
            tasks,
        }
    }
}

/// Clock frozen at 2024-01-31 08:00 UTC.
///
/// # Errors
///
/// Returns an error if the instant cannot be built.
#[fixture]
pub fn clock() -> Result<FixedClock, eyre::Report> {
    Ok(FixedClock(crate::test_helpers::utc(2024, 1, 31, 8, 0)?))
}
