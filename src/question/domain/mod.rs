//! Domain model for queued questions.

mod error;
mod ids;
mod question;

pub use error::QuestionDomainError;
pub use ids::QuestionId;
pub use question::{PersistedQuestionData, Question};
