//! Unit reviews and review-driven repair task generation.
//!
//! A reviewer walks a unit during turnover and records observations, each
//! with a severity. Observations of high or critical severity produce repair
//! tasks against the reviewed unit. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the pure derivation rule in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services, including task generation, in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
