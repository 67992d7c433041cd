//! In-memory question adapters.

mod question;

pub use question::InMemoryQuestionRepository;
