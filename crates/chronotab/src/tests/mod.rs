//! Cross-module schedule compilation tests.

mod equivalence;
mod specs;

use crate::schedule::{CronSchedule, Schedule};

/// Parses a spec and unwraps the cron variant.
fn cron(spec: &str) -> CronSchedule {
    match crate::parse::parse(spec) {
        Ok(Schedule::Cron(schedule)) => schedule,
        other => panic!("expected cron schedule from {spec:?}, got {other:?}"),
    }
}
