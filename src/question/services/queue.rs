//! Service layer for submitting, answering, and archiving questions.

use crate::question::{
    domain::{Question, QuestionDomainError, QuestionId},
    ports::{QuestionRepository, QuestionRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Service-level errors for question queue operations.
#[derive(Debug, Error)]
pub enum QuestionServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] QuestionDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] QuestionRepositoryError),
}

/// Result type for question queue operations.
pub type QuestionServiceResult<T> = Result<T, QuestionServiceError>;

/// Question queue orchestration service.
#[derive(Clone)]
pub struct QuestionQueueService<R>
where
    R: QuestionRepository,
{
    repository: Arc<R>,
}

impl<R> QuestionQueueService<R>
where
    R: QuestionRepository,
{
    /// Creates a new question queue service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds a question to the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionServiceError`] when the content is blank or the
    /// repository rejects persistence.
    #[instrument(skip_all)]
    pub async fn add_question(
        &self,
        content: impl Into<String> + Send,
    ) -> QuestionServiceResult<Question> {
        let question = Question::new(content)?;
        self.repository.store(&question).await?;
        info!(question_id = %question.id(), "question queued");
        Ok(question)
    }

    /// Lists all questions, archived ones included.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn retrieve_questions(&self) -> QuestionServiceResult<Vec<Question>> {
        Ok(self.repository.list_all().await?)
    }

    /// Records a response to a question.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionServiceError::Repository`] when the question does
    /// not exist.
    #[instrument(skip_all, fields(question_id = %id))]
    pub async fn respond_to_question(
        &self,
        id: QuestionId,
        response: impl Into<String> + Send,
    ) -> QuestionServiceResult<Question> {
        let mut question = self.require(id).await?;
        question.respond(response);
        self.repository.update(&question).await?;
        Ok(question)
    }

    /// Sets the queue priority of a question.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionServiceError::Repository`] when the question does
    /// not exist.
    #[instrument(skip_all, fields(question_id = %id, priority = priority))]
    pub async fn prioritize_question(
        &self,
        id: QuestionId,
        priority: u32,
    ) -> QuestionServiceResult<Question> {
        let mut question = self.require(id).await?;
        question.prioritize(priority);
        self.repository.update(&question).await?;
        Ok(question)
    }

    /// Archives a question.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionServiceError::Repository`] when the question does
    /// not exist.
    #[instrument(skip_all, fields(question_id = %id))]
    pub async fn archive_question(&self, id: QuestionId) -> QuestionServiceResult<Question> {
        let mut question = self.require(id).await?;
        question.archive();
        self.repository.update(&question).await?;
        info!("question archived");
        Ok(question)
    }

    async fn require(&self, id: QuestionId) -> QuestionServiceResult<Question> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| QuestionRepositoryError::NotFound(id).into())
    }
}
