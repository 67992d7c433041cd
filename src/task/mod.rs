//! Turnover task tracking.
//!
//! Tasks are units of corrective or preparatory work tied to a property unit.
//! They are created manually or generated from unit reviews, then assigned,
//! rescheduled, and completed. The module follows hexagonal architecture:
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
