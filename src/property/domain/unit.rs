//! Rentable unit entity owned by a property.

use super::{PropertyDomainError, PropertyId, UnitId};
use serde::{Deserialize, Serialize};

/// A unit inside a property's unit sub-collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyUnit {
    id: UnitId,
    property_id: PropertyId,
    unit_number: String,
    condition: String,
    has_review: bool,
}

/// Parameter object for reconstructing a persisted unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUnitData {
    /// Persisted unit identifier.
    pub id: UnitId,
    /// Owning property.
    pub property_id: PropertyId,
    /// Persisted unit number label.
    pub unit_number: String,
    /// Persisted condition label.
    pub condition: String,
    /// Whether a review has been recorded for the unit.
    pub has_review: bool,
}

impl PropertyUnit {
    /// Creates a new, not yet reviewed unit for the given property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::EmptyUnitNumber`] when the unit number
    /// is blank.
    pub fn new(
        property_id: PropertyId,
        unit_number: impl Into<String>,
        condition: impl Into<String>,
    ) -> Result<Self, PropertyDomainError> {
        let raw = unit_number.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PropertyDomainError::EmptyUnitNumber);
        }
        Ok(Self {
            id: UnitId::new(),
            property_id,
            unit_number: trimmed.to_owned(),
            condition: condition.into(),
            has_review: false,
        })
    }

    /// Reconstructs a unit from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUnitData) -> Self {
        Self {
            id: data.id,
            property_id: data.property_id,
            unit_number: data.unit_number,
            condition: data.condition,
            has_review: data.has_review,
        }
    }

    /// Returns the unit identifier.
    #[must_use]
    pub const fn id(&self) -> UnitId {
        self.id
    }

    /// Returns the owning property identifier.
    #[must_use]
    pub const fn property_id(&self) -> PropertyId {
        self.property_id
    }

    /// Returns the unit number label.
    #[must_use]
    pub fn unit_number(&self) -> &str {
        &self.unit_number
    }

    /// Returns the free-text condition label.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Returns whether a review has been recorded for this unit.
    #[must_use]
    pub const fn has_review(&self) -> bool {
        self.has_review
    }

    /// Re-homes the unit under the given property.
    ///
    /// Storage adapters call this when listing a property's units so that
    /// every returned unit carries its owning property identifier.
    pub const fn assign_property(&mut self, property_id: PropertyId) {
        self.property_id = property_id;
    }

    /// Records that the unit has been reviewed.
    pub const fn mark_reviewed(&mut self) {
        self.has_review = true;
    }

    /// Replaces the condition label.
    pub fn change_condition(&mut self, condition: impl Into<String>) {
        self.condition = condition.into();
    }
}
