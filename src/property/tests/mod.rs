//! Unit tests for properties and units.
