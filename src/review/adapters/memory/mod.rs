//! In-memory review adapters.

mod review;

pub use review::InMemoryReviewRepository;
