//! Service layer for property registration, updates, and unit management.

use crate::property::{
    domain::{Property, PropertyDomainError, PropertyId, PropertyUnit, UnitId},
    ports::{PropertyRepository, PropertyRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Partial update applied to an existing property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyUpdate {
    address: Option<String>,
    number_of_units: Option<u32>,
}

impl PropertyUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets a replacement unit count.
    #[must_use]
    pub const fn with_number_of_units(mut self, number_of_units: u32) -> Self {
        self.number_of_units = Some(number_of_units);
        self
    }
}

/// Request payload for adding a unit to a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUnitRequest {
    unit_number: String,
    condition: String,
}

impl AddUnitRequest {
    /// Creates a request for a unit with the given number and an empty
    /// condition label.
    #[must_use]
    pub fn new(unit_number: impl Into<String>) -> Self {
        Self {
            unit_number: unit_number.into(),
            condition: String::new(),
        }
    }

    /// Sets the initial condition label.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }
}

/// Service-level errors for property operations.
#[derive(Debug, Error)]
pub enum PropertyServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PropertyDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PropertyRepositoryError),
}

/// Result type for property service operations.
pub type PropertyServiceResult<T> = Result<T, PropertyServiceError>;

/// Property and unit orchestration service.
#[derive(Clone)]
pub struct PropertyService<R, C>
where
    R: PropertyRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> PropertyService<R, C>
where
    R: PropertyRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new property service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError`] when the address is blank or the
    /// repository rejects persistence.
    #[instrument(skip_all, fields(number_of_units = number_of_units))]
    pub async fn add_property(
        &self,
        address: impl Into<String> + Send,
        number_of_units: u32,
    ) -> PropertyServiceResult<Property> {
        let property = Property::new(address, number_of_units, &*self.clock)?;
        self.repository.store(&property).await?;
        info!(property_id = %property.id(), "property added");
        Ok(property)
    }

    /// Applies a partial update to an existing property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::PropertyNotFound`] (wrapped) when
    /// the property does not exist, or a domain error when the new address is
    /// blank.
    #[instrument(skip_all, fields(property_id = %id))]
    pub async fn update_property(
        &self,
        id: PropertyId,
        update: PropertyUpdate,
    ) -> PropertyServiceResult<Property> {
        let mut property = self.require_property(id).await?;
        if let Some(address) = update.address {
            property.change_address(address, &*self.clock)?;
        }
        if let Some(number_of_units) = update.number_of_units {
            property.change_number_of_units(number_of_units, &*self.clock);
        }
        self.repository.update(&property).await?;
        Ok(property)
    }

    /// Retrieves a single property.
    ///
    /// Returns `Ok(None)` when no property has the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_property_details(
        &self,
        id: PropertyId,
    ) -> PropertyServiceResult<Option<Property>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists all properties.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn get_properties(&self) -> PropertyServiceResult<Vec<Property>> {
        Ok(self.repository.list_all().await?)
    }

    /// Deletes a property and its units.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError::Repository`] when the property does
    /// not exist or deletion fails.
    #[instrument(skip_all, fields(property_id = %id))]
    pub async fn delete_property(&self, id: PropertyId) -> PropertyServiceResult<()> {
        self.repository.delete(id).await?;
        info!("property deleted");
        Ok(())
    }

    /// Adds a unit to an existing property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError`] when the unit number is blank or the
    /// owning property does not exist.
    #[instrument(skip_all, fields(property_id = %property_id))]
    pub async fn add_unit(
        &self,
        property_id: PropertyId,
        request: AddUnitRequest,
    ) -> PropertyServiceResult<PropertyUnit> {
        let unit = PropertyUnit::new(property_id, request.unit_number, request.condition)?;
        self.repository.store_unit(property_id, &unit).await?;
        info!(unit_id = %unit.id(), "unit added");
        Ok(unit)
    }

    /// Lists the units of a property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyServiceError::Repository`] when the property does
    /// not exist.
    pub async fn retrieve_units(
        &self,
        property_id: PropertyId,
    ) -> PropertyServiceResult<Vec<PropertyUnit>> {
        Ok(self.repository.list_units(property_id).await?)
    }

    /// Flags a unit as reviewed.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyRepositoryError::UnitNotFound`] (wrapped) when the
    /// unit is not stored under the given property.
    pub async fn mark_unit_reviewed(
        &self,
        property_id: PropertyId,
        unit_id: UnitId,
    ) -> PropertyServiceResult<PropertyUnit> {
        let mut unit = self
            .repository
            .list_units(property_id)
            .await?
            .into_iter()
            .find(|unit| unit.id() == unit_id)
            .ok_or(PropertyRepositoryError::UnitNotFound(unit_id))?;
        unit.mark_reviewed();
        self.repository.update_unit(&unit).await?;
        Ok(unit)
    }

    async fn require_property(&self, id: PropertyId) -> PropertyServiceResult<Property> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| PropertyRepositoryError::PropertyNotFound(id).into())
    }
}
