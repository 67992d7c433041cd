//! Question entity.

use serde::{Deserialize, Serialize};

use super::{QuestionDomainError, QuestionId};

/// A question awaiting a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    content: String,
    response: Option<String>,
    priority: u32,
    archived: bool,
}

/// Parameter object for reconstructing a persisted question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedQuestionData {
    /// Persisted question identifier.
    pub id: QuestionId,
    /// Persisted question text.
    pub content: String,
    /// Persisted response, if answered.
    pub response: Option<String>,
    /// Persisted queue priority.
    pub priority: u32,
    /// Whether the question has been archived.
    pub archived: bool,
}

impl Question {
    /// Creates an unanswered, unarchived question with priority zero.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionDomainError::EmptyContent`] for blank content.
    pub fn new(content: impl Into<String>) -> Result<Self, QuestionDomainError> {
        let raw = content.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionDomainError::EmptyContent);
        }
        Ok(Self {
            id: QuestionId::new(),
            content: trimmed.to_owned(),
            response: None,
            priority: 0,
            archived: false,
        })
    }

    /// Reconstructs a question from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedQuestionData) -> Self {
        Self {
            id: data.id,
            content: data.content,
            response: data.response,
            priority: data.priority,
            archived: data.archived,
        }
    }

    /// Returns the question identifier.
    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    /// Returns the question text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the response, if the question has been answered.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Returns the queue priority.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns whether the question has been archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.archived
    }

    /// Records a response, replacing any earlier one.
    pub fn respond(&mut self, response: impl Into<String>) {
        self.response = Some(response.into());
    }

    /// Sets the queue priority.
    pub const fn prioritize(&mut self, priority: u32) {
        self.priority = priority;
    }

    /// Archives the question.
    pub const fn archive(&mut self) {
        self.archived = true;
    }
}
