//! Adapter implementations for question persistence ports.

pub mod memory;
