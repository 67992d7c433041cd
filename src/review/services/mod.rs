//! Application services for review submission and task generation.

mod review;
mod task_generation;

pub use review::{
    ReviewService, ReviewServiceError, ReviewServiceResult, ReviewUpdate, SubmitReviewRequest,
};
pub use task_generation::{TaskGenerationError, TaskGenerationResult, TaskGenerationService};
