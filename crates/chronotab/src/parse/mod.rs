//! Cron spec parsing.
//!
//! [`parse`] is the entry point: it strips an optional `TZ=` prefix,
//! dispatches `@`-prefixed descriptors, and otherwise compiles the 5 or 6
//! whitespace-separated fields into a [`CronSchedule`].

mod descriptor;
mod duration;
mod range;

use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{ParseError, ParseResult};
use crate::schedule::{Bounds, CronSchedule, Schedule, ZoneRef};
use range::compile_field;

/// Compiles a cron spec into a [`Schedule`].
///
/// Accepts full 5/6-field crontab specs (`"0 30 4 * * *"`; a 5-field spec
/// defaults the seconds field to `0`), descriptors (`"@daily"`,
/// `"@every 1h30m"`), and an optional leading `TZ=<name> ` prefix selecting
/// the IANA timezone the schedule is evaluated in. Without a prefix the
/// schedule is evaluated in the process-local timezone.
///
/// ## Errors
///
/// Returns a [`ParseError`] naming the offending token and the violated
/// constraint. The first failure aborts; no partial schedule is produced.
#[tracing::instrument(skip(spec), fields(spec_len = spec.len()))]
pub fn parse(spec: &str) -> ParseResult<Schedule> {
    let (zone, spec) = extract_timezone(spec)?;

    if spec.starts_with('@') {
        tracing::debug!("Resolving descriptor spec");
        return descriptor::resolve(spec, zone);
    }

    // (second, optional) (minute) (hour) (day of month) (month) (day of week)
    let mut fields: Vec<&str> = spec.split_whitespace().collect();
    if fields.len() != 5 && fields.len() != 6 {
        tracing::debug!(count = fields.len(), "Wrong field count");
        return Err(ParseError::FieldCount {
            count: fields.len(),
            spec: spec.to_string(),
        });
    }

    // Standard crontabs omit the seconds field.
    if fields.len() == 5 {
        fields.insert(0, "0");
    }

    Ok(Schedule::Cron(CronSchedule {
        second: compile_field(fields[0], Bounds::SECOND)?,
        minute: compile_field(fields[1], Bounds::MINUTE)?,
        hour: compile_field(fields[2], Bounds::HOUR)?,
        day_of_month: compile_field(fields[3], Bounds::DAY_OF_MONTH)?,
        month: compile_field(fields[4], Bounds::MONTH)?,
        day_of_week: compile_field(fields[5], Bounds::DAY_OF_WEEK)?,
        timezone: zone,
    }))
}

/// Splits an optional `TZ=<name> ` prefix off the spec.
///
/// The zone name runs to the first space. A prefix with no schedule after it
/// is refused rather than indexed past.
fn extract_timezone(spec: &str) -> ParseResult<(ZoneRef, &str)> {
    let Some(prefixed) = spec.strip_prefix("TZ=") else {
        return Ok((ZoneRef::Local, spec));
    };

    let Some((name, remainder)) = prefixed.split_once(' ') else {
        return Err(ParseError::InvalidTimezone {
            name: prefixed.to_string(),
        });
    };

    let tz = Tz::from_str(name).map_err(|_e| ParseError::InvalidTimezone {
        name: name.to_string(),
    })?;

    Ok((ZoneRef::Tz(tz), remainder.trim()))
}
