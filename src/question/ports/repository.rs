//! Repository port for question persistence.

use crate::question::domain::{Question, QuestionId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for question repository operations.
pub type QuestionRepositoryResult<T> = Result<T, QuestionRepositoryError>;

/// Question persistence contract.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Stores a new question.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionRepositoryError::DuplicateQuestion`] when the
    /// question ID already exists.
    async fn store(&self, question: &Question) -> QuestionRepositoryResult<()>;

    /// Persists changes to an existing question.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionRepositoryError::NotFound`] when the question does
    /// not exist.
    async fn update(&self, question: &Question) -> QuestionRepositoryResult<()>;

    /// Finds a question by identifier.
    async fn find_by_id(&self, id: QuestionId) -> QuestionRepositoryResult<Option<Question>>;

    /// Returns all questions, archived ones included, in insertion order.
    async fn list_all(&self) -> QuestionRepositoryResult<Vec<Question>>;
}

/// Errors returned by question repository implementations.
#[derive(Debug, Clone, Error)]
pub enum QuestionRepositoryError {
    /// A question with the same identifier already exists.
    #[error("duplicate question identifier: {0}")]
    DuplicateQuestion(QuestionId),

    /// The question was not found.
    #[error("question not found: {0}")]
    NotFound(QuestionId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl QuestionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
