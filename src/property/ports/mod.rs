//! Port contracts for property and unit persistence.

pub mod repository;

pub use repository::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult};
