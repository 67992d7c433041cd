//! Adapter implementations for review persistence ports.

pub mod memory;
