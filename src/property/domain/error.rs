//! Error types for property domain validation.

use thiserror::Error;

/// Errors returned while constructing property and unit values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyDomainError {
    /// The property address is empty after trimming.
    #[error("property address must not be empty")]
    EmptyAddress,

    /// The unit number is empty after trimming.
    #[error("unit number must not be empty")]
    EmptyUnitNumber,
}
