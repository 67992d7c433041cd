//! Unit review aggregate root.

use super::Observation;
use crate::property::domain::UnitId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a unit review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(Uuid);

impl ReviewId {
    /// Creates a new random review identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a review identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reviewer's inspection record for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitReview {
    id: ReviewId,
    unit_id: UnitId,
    reviewer_id: UserId,
    reviewed_at: DateTime<Utc>,
    overall_condition: String,
    observations: Vec<Observation>,
    photo_urls: Vec<String>,
    notes: Option<String>,
}

/// Parameter object for reconstructing a persisted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReviewData {
    /// Persisted review identifier.
    pub id: ReviewId,
    /// Reviewed unit.
    pub unit_id: UnitId,
    /// Reviewing user.
    pub reviewer_id: UserId,
    /// Review timestamp.
    pub reviewed_at: DateTime<Utc>,
    /// Overall condition label.
    pub overall_condition: String,
    /// Observations in recorded order.
    pub observations: Vec<Observation>,
    /// Photo references.
    pub photo_urls: Vec<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl UnitReview {
    /// Records a new review with no observations, stamped with the current
    /// clock time.
    #[must_use]
    pub fn new(
        unit_id: UnitId,
        reviewer_id: UserId,
        overall_condition: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ReviewId::new(),
            unit_id,
            reviewer_id,
            reviewed_at: clock.utc(),
            overall_condition: overall_condition.into(),
            observations: Vec::new(),
            photo_urls: Vec::new(),
            notes: None,
        }
    }

    /// Reconstructs a review from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReviewData) -> Self {
        Self {
            id: data.id,
            unit_id: data.unit_id,
            reviewer_id: data.reviewer_id,
            reviewed_at: data.reviewed_at,
            overall_condition: data.overall_condition,
            observations: data.observations,
            photo_urls: data.photo_urls,
            notes: data.notes,
        }
    }

    /// Sets the observations, preserving the given order.
    #[must_use]
    pub fn with_observations(
        mut self,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Self {
        self.observations = observations.into_iter().collect();
        self
    }

    /// Sets the photo references.
    #[must_use]
    pub fn with_photo_urls(mut self, photo_urls: impl IntoIterator<Item = String>) -> Self {
        self.photo_urls = photo_urls.into_iter().collect();
        self
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the review identifier.
    #[must_use]
    pub const fn id(&self) -> ReviewId {
        self.id
    }

    /// Returns the reviewed unit.
    #[must_use]
    pub const fn unit_id(&self) -> UnitId {
        self.unit_id
    }

    /// Returns the reviewing user.
    #[must_use]
    pub const fn reviewer_id(&self) -> UserId {
        self.reviewer_id
    }

    /// Returns the review timestamp.
    #[must_use]
    pub const fn reviewed_at(&self) -> DateTime<Utc> {
        self.reviewed_at
    }

    /// Returns the overall condition label.
    #[must_use]
    pub fn overall_condition(&self) -> &str {
        &self.overall_condition
    }

    /// Returns the observations in recorded order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Returns the photo references.
    #[must_use]
    pub fn photo_urls(&self) -> &[String] {
        &self.photo_urls
    }

    /// Returns the free-text notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Replaces the overall condition label.
    pub fn revise_condition(&mut self, overall_condition: impl Into<String>) {
        self.overall_condition = overall_condition.into();
    }

    /// Replaces the observations.
    pub fn replace_observations(&mut self, observations: Vec<Observation>) {
        self.observations = observations;
    }

    /// Replaces the photo references.
    pub fn replace_photo_urls(&mut self, photo_urls: Vec<String>) {
        self.photo_urls = photo_urls;
    }

    /// Replaces the free-text notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }
}
