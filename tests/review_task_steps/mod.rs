//! Step definitions for review task generation scenarios.

pub mod given;
pub mod store;
pub mod then;
pub mod when;
pub mod world;
