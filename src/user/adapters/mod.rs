//! Adapter implementations for user persistence ports.

pub mod memory;
