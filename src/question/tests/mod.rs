//! Unit tests for the question queue.
