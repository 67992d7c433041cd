//! Domain model for unit reviews.
//!
//! The derivation of repair tasks from observations lives in [`repair`] as
//! pure functions; submitting the derived tasks is a service concern.

mod observation;
pub mod repair;
mod review;

pub use observation::{Observation, ParseSeverityError, Severity};
pub use repair::{DueDateAnchor, RepairSchedule};
pub use review::{PersistedReviewData, ReviewId, UnitReview};
