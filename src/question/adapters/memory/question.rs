//! In-memory repository for queued questions.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::question::{
    domain::{Question, QuestionId},
    ports::{QuestionRepository, QuestionRepositoryError, QuestionRepositoryResult},
};

/// Thread-safe in-memory question repository.
///
/// Questions are kept in a vector so listing preserves submission order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn store(&self, question: &Question) -> QuestionRepositoryResult<()> {
        let mut questions = self.questions.write().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if questions.iter().any(|stored| stored.id() == question.id()) {
            return Err(QuestionRepositoryError::DuplicateQuestion(question.id()));
        }
        questions.push(question.clone());
        Ok(())
    }

    async fn update(&self, question: &Question) -> QuestionRepositoryResult<()> {
        let mut questions = self.questions.write().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = questions
            .iter_mut()
            .find(|stored| stored.id() == question.id())
            .ok_or(QuestionRepositoryError::NotFound(question.id()))?;
        *stored = question.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: QuestionId) -> QuestionRepositoryResult<Option<Question>> {
        let questions = self.questions.read().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(questions.iter().find(|stored| stored.id() == id).cloned())
    }

    async fn list_all(&self) -> QuestionRepositoryResult<Vec<Question>> {
        let questions = self.questions.read().map_err(|err| {
            QuestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(questions.clone())
    }
}
