//! Turnover: property turnover management.
//!
//! This crate provides the core of a property-turnover workflow: managing
//! properties and their units, recording unit reviews, tracking the tasks that
//! prepare a unit for its next occupant, and a queue of open questions.
//!
//! The one piece of business logic beyond record keeping is review-driven
//! task generation: observations of high or critical severity in a unit review
//! produce repair tasks with a priority mapped from the severity and a due
//! date a fixed number of days out.
//!
//! # Architecture
//!
//! Turnover follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`property`]: Properties and their units
//! - [`review`]: Unit reviews and repair task generation
//! - [`task`]: Task creation, assignment, and completion
//! - [`question`]: Question queue
//! - [`user`]: User directory
//! - [`config`]: JSON configuration

pub mod config;
pub mod property;
pub mod question;
pub mod review;
pub mod task;
pub mod user;

#[cfg(test)]
mod test_support;
