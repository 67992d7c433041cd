//! Shared world state for review task generation scenarios.

use std::sync::Arc;

use super::store::FlakyTaskRepository;
use chrono::{DateTime, NaiveDate, Utc};
use rstest::fixture;
use turnover::property::domain::UnitId;
use turnover::review::{domain::Observation, services::TaskGenerationResult};
use turnover::task::domain::Task;

/// Scenario world for review task generation behaviour tests.
pub struct ReviewTaskWorld {
    pub store: Arc<FlakyTaskRepository>,
    pub unit_id: UnitId,
    pub recorded_at: Option<DateTime<Utc>>,
    pub observations: Vec<Observation>,
    pub last_result: Option<TaskGenerationResult<Vec<Task>>>,
}

impl ReviewTaskWorld {
    /// Creates a world with an empty task store and no review.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(FlakyTaskRepository::default()),
            unit_id: UnitId::new(),
            recorded_at: None,
            observations: Vec::new(),
            last_result: None,
        }
    }
}

impl Default for ReviewTaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReviewTaskWorld {
    ReviewTaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an ISO calendar date.
///
/// # Errors
///
/// Returns an error when `raw` is not of the form `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("bad date {raw}: {err}"))
}
