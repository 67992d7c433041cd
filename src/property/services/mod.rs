//! Application services for property and unit management.

mod property;

pub use property::{
    AddUnitRequest, PropertyService, PropertyServiceError, PropertyServiceResult, PropertyUpdate,
};
