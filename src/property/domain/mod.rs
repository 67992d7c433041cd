//! Domain model for properties and their units.

mod error;
mod ids;
mod property;
mod unit;

pub use error::PropertyDomainError;
pub use ids::{PropertyId, UnitId};
pub use property::{PersistedPropertyData, Property};
pub use unit::{PersistedUnitData, PropertyUnit};
