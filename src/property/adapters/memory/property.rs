//! In-memory repository for properties and their units.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::property::{
    domain::{Property, PropertyId, PropertyUnit},
    ports::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult},
};

/// Thread-safe in-memory property repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertyRepository {
    state: Arc<RwLock<InMemoryPropertyState>>,
}

#[derive(Debug, Default)]
struct InMemoryPropertyState {
    properties: HashMap<PropertyId, Property>,
    insertion_order: Vec<PropertyId>,
    units: HashMap<PropertyId, Vec<PropertyUnit>>,
}

impl InMemoryPropertyRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PropertyRepositoryResult<RwLockReadGuard<'_, InMemoryPropertyState>> {
        self.state.read().map_err(|err| {
            PropertyRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> PropertyRepositoryResult<RwLockWriteGuard<'_, InMemoryPropertyState>> {
        self.state.write().map_err(|err| {
            PropertyRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn store(&self, property: &Property) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        if state.properties.contains_key(&property.id()) {
            return Err(PropertyRepositoryError::DuplicateProperty(property.id()));
        }
        state.insertion_order.push(property.id());
        state.units.insert(property.id(), Vec::new());
        state.properties.insert(property.id(), property.clone());
        Ok(())
    }

    async fn update(&self, property: &Property) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .properties
            .get_mut(&property.id())
            .ok_or(PropertyRepositoryError::PropertyNotFound(property.id()))?;
        *stored = property.clone();
        Ok(())
    }

    async fn delete(&self, id: PropertyId) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        if state.properties.remove(&id).is_none() {
            return Err(PropertyRepositoryError::PropertyNotFound(id));
        }
        state.insertion_order.retain(|stored_id| *stored_id != id);
        state.units.remove(&id);
        Ok(())
    }

    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<Property>> {
        let state = self.read()?;
        Ok(state.properties.get(&id).cloned())
    }

    async fn list_all(&self) -> PropertyRepositoryResult<Vec<Property>> {
        let state = self.read()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.properties.get(id).cloned())
            .collect())
    }

    async fn store_unit(
        &self,
        property_id: PropertyId,
        unit: &PropertyUnit,
    ) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        let already_stored = state
            .units
            .values()
            .flatten()
            .any(|stored| stored.id() == unit.id());
        if already_stored {
            return Err(PropertyRepositoryError::DuplicateUnit(unit.id()));
        }
        let units = state
            .units
            .get_mut(&property_id)
            .ok_or(PropertyRepositoryError::PropertyNotFound(property_id))?;
        units.push(unit.clone());
        Ok(())
    }

    async fn update_unit(&self, unit: &PropertyUnit) -> PropertyRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .units
            .get_mut(&unit.property_id())
            .and_then(|units| units.iter_mut().find(|stored| stored.id() == unit.id()))
            .ok_or(PropertyRepositoryError::UnitNotFound(unit.id()))?;
        *stored = unit.clone();
        Ok(())
    }

    async fn list_units(
        &self,
        property_id: PropertyId,
    ) -> PropertyRepositoryResult<Vec<PropertyUnit>> {
        let state = self.read()?;
        let units = state
            .units
            .get(&property_id)
            .ok_or(PropertyRepositoryError::PropertyNotFound(property_id))?;
        Ok(units
            .iter()
            .cloned()
            .map(|mut unit| {
                unit.assign_property(property_id);
                unit
            })
            .collect())
    }
}
