//! Port contracts for question persistence.

pub mod repository;

pub use repository::{QuestionRepository, QuestionRepositoryError, QuestionRepositoryResult};
