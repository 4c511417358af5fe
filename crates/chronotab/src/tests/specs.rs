//! End-to-end spec compilation tests.

use std::time::Duration;

use chrono_tz::Tz;

use super::cron;
use crate::error::ParseError;
use crate::parse::parse;
use crate::schedule::{EverySchedule, Schedule, ZoneRef};

#[test_log::test]
fn utc_prefixed_spec_compiles_with_the_zone() {
    let schedule = cron("TZ=UTC 0 30 4 * * *");
    assert_eq!(schedule.timezone, ZoneRef::Tz(Tz::UTC));
    assert_eq!(schedule.minute.bits(), 1 << 30);
    assert!(!schedule.minute.is_wildcard());
}

#[test_log::test]
fn tz_prefix_composes_with_descriptors() {
    let schedule = cron("TZ=Europe/Berlin @daily");
    assert_eq!(schedule.timezone, ZoneRef::Tz(Tz::Europe__Berlin));
    assert_eq!(schedule.hour.bits(), 1);
}

#[test_log::test]
fn every_interval_survives_a_tz_prefix() {
    let schedule = parse("TZ=UTC @every 90s").unwrap();
    assert_eq!(
        schedule,
        Schedule::Every(EverySchedule::new(Duration::from_secs(90)))
    );
}

#[test_log::test]
fn wildcard_flags_distinguish_star_days_from_explicit_days() {
    // Day-of-month explicit, day-of-week wildcard: a calculator must AND the
    // former and ignore the latter. The flags carry that distinction.
    let schedule = cron("0 0 0 15 * *");
    assert!(!schedule.day_of_month.is_wildcard());
    assert!(schedule.day_of_week.is_wildcard());

    let schedule = cron("0 0 0 * * 1");
    assert!(schedule.day_of_month.is_wildcard());
    assert!(!schedule.day_of_week.is_wildcard());
}

#[test_log::test]
fn compiled_schedules_expose_membership() {
    let schedule = cron("0 */10 8-17 * * mon-fri");
    assert!(schedule.minute.contains(50));
    assert!(!schedule.minute.contains(55));
    assert!(schedule.hour.contains(8));
    assert!(!schedule.hour.contains(18));
    assert!(schedule.day_of_week.contains(5));
    assert!(!schedule.day_of_week.contains(0));
}

#[test_log::test]
fn malformed_specs_fail_deterministically() {
    assert!(matches!(
        parse("* * * *").unwrap_err(),
        ParseError::FieldCount { count: 4, .. }
    ));
    assert!(matches!(
        parse("60 * * * * *").unwrap_err(),
        ParseError::RangeAboveMaximum { end: 60, .. }
    ));
    assert!(matches!(
        parse("5-2 * * * * *").unwrap_err(),
        ParseError::RangeInverted { start: 5, end: 2, .. }
    ));
    assert!(matches!(
        parse("1/2/3 * * * * *").unwrap_err(),
        ParseError::TooManySlashes { .. }
    ));
    assert!(matches!(
        parse("*/0 * * * * *").unwrap_err(),
        ParseError::ZeroStep { .. }
    ));
    assert!(matches!(
        parse("@foo").unwrap_err(),
        ParseError::UnrecognizedDescriptor { .. }
    ));
    assert!(matches!(
        parse("@every notaduration").unwrap_err(),
        ParseError::DurationParse { .. }
    ));
}

#[test_log::test]
fn errors_carry_the_offending_text() {
    let err = parse("0 61 * * * *").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("61"), "message was: {message}");
    assert!(message.contains("59"), "message was: {message}");

    let err = parse("@every 3fortnights").unwrap_err();
    assert!(err.to_string().contains("3fortnights"), "message was: {err}");
}
