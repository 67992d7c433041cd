//! Property and unit management for turnover tracking.
//!
//! Properties own a sub-collection of units; each unit is the target of unit
//! reviews and the related entity of generated repair tasks. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
