//! Property aggregate root.

use super::{PropertyDomainError, PropertyId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A managed property containing one or more units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    id: PropertyId,
    address: String,
    number_of_units: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPropertyData {
    /// Persisted property identifier.
    pub id: PropertyId,
    /// Persisted street address.
    pub address: String,
    /// Persisted unit count.
    pub number_of_units: u32,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Creates a new property stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::EmptyAddress`] when the address is
    /// blank.
    pub fn new(
        address: impl Into<String>,
        number_of_units: u32,
        clock: &impl Clock,
    ) -> Result<Self, PropertyDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: PropertyId::new(),
            address: validated_address(&address.into())?,
            number_of_units,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a property from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPropertyData) -> Self {
        Self {
            id: data.id,
            address: data.address,
            number_of_units: data.number_of_units,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the property identifier.
    #[must_use]
    pub const fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the declared number of units.
    #[must_use]
    pub const fn number_of_units(&self) -> u32 {
        self.number_of_units
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the street address.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::EmptyAddress`] when the address is
    /// blank.
    pub fn change_address(
        &mut self,
        address: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), PropertyDomainError> {
        self.address = validated_address(&address.into())?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the declared number of units.
    pub fn change_number_of_units(&mut self, number_of_units: u32, clock: &impl Clock) {
        self.number_of_units = number_of_units;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn validated_address(raw: &str) -> Result<String, PropertyDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PropertyDomainError::EmptyAddress);
    }
    Ok(trimmed.to_owned())
}
