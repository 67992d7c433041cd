//! Given steps for review task generation scenarios.

use super::world::{ReviewTaskWorld, parse_date};
use crate::test_helpers::utc;
use chrono::Datelike;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use turnover::review::domain::{Observation, Severity};

#[given(r#"a unit review recorded on "{date}""#)]
fn review_recorded_on(world: &mut ReviewTaskWorld, date: String) -> Result<(), eyre::Report> {
    let day = parse_date(&date)?;
    let recorded_at = utc(day.year(), day.month(), day.day(), 8, 0)?;
    world.recorded_at = Some(recorded_at);
    Ok(())
}

#[given(
    r#"an observation in "{area}" of "{issue_type}" described as "{description}" with severity "{severity}""#
)]
fn observation(
    world: &mut ReviewTaskWorld,
    area: String,
    issue_type: String,
    description: String,
    severity: String,
) -> Result<(), eyre::Report> {
    let parsed = Severity::try_from(severity.as_str()).wrap_err("parse observation severity")?;
    world
        .observations
        .push(Observation::new(area, issue_type, description, parsed));
    Ok(())
}

#[given("the task store rejects write number {attempt:usize}")]
fn store_rejects_write(world: &mut ReviewTaskWorld, attempt: usize) {
    world.store.reject_write_number(attempt);
}
