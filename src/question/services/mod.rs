//! Application services for the question queue.

mod queue;

pub use queue::{QuestionQueueService, QuestionServiceError, QuestionServiceResult};
