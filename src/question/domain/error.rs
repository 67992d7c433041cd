//! Error types for question domain validation.

use thiserror::Error;

/// Errors returned while constructing question values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionDomainError {
    /// The question content is empty after trimming.
    #[error("question content must not be empty")]
    EmptyContent,
}
