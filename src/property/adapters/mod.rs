//! Adapter implementations for property persistence ports.

pub mod memory;
