//! In-memory property adapters.

mod property;

pub use property::InMemoryPropertyRepository;
