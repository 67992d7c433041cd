//! Unit tests for unit reviews and repair task generation.

mod repair_tests;
