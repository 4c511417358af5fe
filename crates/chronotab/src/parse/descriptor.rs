//! Symbolic descriptor resolution.
//!
//! Maps `@yearly`-style shorthands onto fully formed bitmask schedules and
//! `@every <duration>` onto interval schedules.

use crate::error::{ParseError, ParseResult};
use crate::schedule::field::{all, min_only};
use crate::schedule::{Bounds, CronSchedule, EverySchedule, Schedule, ZoneRef};

use super::duration;

const EVERY_PREFIX: &str = "@every ";

/// Resolves an `@`-prefixed spec against the descriptor table.
///
/// Matching is exact and case-sensitive. Anything that is neither a table
/// entry nor an `@every ` interval fails with
/// [`ParseError::UnrecognizedDescriptor`].
pub(crate) fn resolve(spec: &str, zone: ZoneRef) -> ParseResult<Schedule> {
    let schedule = match spec {
        "@yearly" | "@annually" => CronSchedule {
            second: min_only(Bounds::SECOND),
            minute: min_only(Bounds::MINUTE),
            hour: min_only(Bounds::HOUR),
            day_of_month: min_only(Bounds::DAY_OF_MONTH),
            month: min_only(Bounds::MONTH),
            day_of_week: all(Bounds::DAY_OF_WEEK),
            timezone: zone,
        },

        "@monthly" => CronSchedule {
            second: min_only(Bounds::SECOND),
            minute: min_only(Bounds::MINUTE),
            hour: min_only(Bounds::HOUR),
            day_of_month: min_only(Bounds::DAY_OF_MONTH),
            month: all(Bounds::MONTH),
            day_of_week: all(Bounds::DAY_OF_WEEK),
            timezone: zone,
        },

        "@weekly" => CronSchedule {
            second: min_only(Bounds::SECOND),
            minute: min_only(Bounds::MINUTE),
            hour: min_only(Bounds::HOUR),
            day_of_month: all(Bounds::DAY_OF_MONTH),
            month: all(Bounds::MONTH),
            day_of_week: min_only(Bounds::DAY_OF_WEEK),
            timezone: zone,
        },

        "@daily" | "@midnight" => CronSchedule {
            second: min_only(Bounds::SECOND),
            minute: min_only(Bounds::MINUTE),
            hour: min_only(Bounds::HOUR),
            day_of_month: all(Bounds::DAY_OF_MONTH),
            month: all(Bounds::MONTH),
            day_of_week: all(Bounds::DAY_OF_WEEK),
            timezone: zone,
        },

        "@hourly" => CronSchedule {
            second: min_only(Bounds::SECOND),
            minute: min_only(Bounds::MINUTE),
            hour: all(Bounds::HOUR),
            day_of_month: all(Bounds::DAY_OF_MONTH),
            month: all(Bounds::MONTH),
            day_of_week: all(Bounds::DAY_OF_WEEK),
            timezone: zone,
        },

        _ => {
            if let Some(text) = spec.strip_prefix(EVERY_PREFIX) {
                let period = duration::parse_duration(text)?;
                return Ok(Schedule::Every(EverySchedule::new(period)));
            }
            return Err(ParseError::UnrecognizedDescriptor {
                spec: spec.to_string(),
            });
        }
    };

    Ok(Schedule::Cron(schedule))
}
