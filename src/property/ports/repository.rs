//! Repository port for properties and their unit sub-collections.

use crate::property::domain::{Property, PropertyId, PropertyUnit, UnitId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for property repository operations.
pub type PropertyRepositoryResult<T> = Result<T, PropertyRepositoryError>;

/// Property persistence contract.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Stores a new property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::DuplicateProperty`] when the
    /// property ID already exists.
    async fn store(&self, property: &Property) -> PropertyRepositoryResult<()>;

    /// Persists changes to an existing property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::PropertyNotFound`] when the property
    /// does not exist.
    async fn update(&self, property: &Property) -> PropertyRepositoryResult<()>;

    /// Deletes a property together with its units.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::PropertyNotFound`] when the property
    /// does not exist.
    async fn delete(&self, id: PropertyId) -> PropertyRepositoryResult<()>;

    /// Finds a property by identifier.
    ///
    /// Returns `None` when the property does not exist.
    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<Property>>;

    /// Returns all properties in insertion order.
    async fn list_all(&self) -> PropertyRepositoryResult<Vec<Property>>;

    /// Adds a unit to the property's unit sub-collection.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::PropertyNotFound`] when the owning
    /// property does not exist or [`PropertyRepositoryError::DuplicateUnit`]
    /// when the unit ID is already stored.
    async fn store_unit(
        &self,
        property_id: PropertyId,
        unit: &PropertyUnit,
    ) -> PropertyRepositoryResult<()>;

    /// Persists changes to an existing unit.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::UnitNotFound`] when the unit does
    /// not exist under its owning property.
    async fn update_unit(&self, unit: &PropertyUnit) -> PropertyRepositoryResult<()>;

    /// Returns the units stored under a property, each stamped with the
    /// owning property identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::PropertyNotFound`] when the property
    /// does not exist.
    async fn list_units(&self, property_id: PropertyId)
    -> PropertyRepositoryResult<Vec<PropertyUnit>>;
}

/// Errors returned by property repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PropertyRepositoryError {
    /// A property with the same identifier already exists.
    #[error("duplicate property identifier: {0}")]
    DuplicateProperty(PropertyId),

    /// A unit with the same identifier already exists.
    #[error("duplicate unit identifier: {0}")]
    DuplicateUnit(UnitId),

    /// The property was not found.
    #[error("property not found: {0}")]
    PropertyNotFound(PropertyId),

    /// The unit was not found.
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PropertyRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
