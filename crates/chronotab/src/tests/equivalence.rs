//! Descriptor and shorthand equivalence tests.
//!
//! Descriptors must compile to exactly the schedules their explicit crontab
//! spellings produce — same bitmasks, same wildcard flags, field for field.

use super::cron;

#[test_log::test]
fn daily_equals_explicit_midnight_spec() {
    assert_eq!(cron("@daily"), cron("0 0 0 * * *"));
}

#[test_log::test]
fn yearly_equals_explicit_january_first() {
    assert_eq!(cron("@yearly"), cron("0 0 0 1 1 *"));
}

#[test_log::test]
fn monthly_equals_explicit_first_of_month() {
    assert_eq!(cron("@monthly"), cron("0 0 0 1 * *"));
}

#[test_log::test]
fn weekly_equals_explicit_sunday() {
    assert_eq!(cron("@weekly"), cron("0 0 0 * * 0"));
}

#[test_log::test]
fn hourly_equals_explicit_top_of_hour() {
    assert_eq!(cron("@hourly"), cron("0 0 * * * *"));
}

#[test_log::test]
fn step_of_one_equals_plain_star() {
    assert_eq!(
        cron("*/1 */1 */1 */1 */1 */1"),
        cron("* * * * * *")
    );
}

#[test_log::test]
fn names_equal_numbers_in_full_specs() {
    assert_eq!(cron("0 0 0 1 jan mon"), cron("0 0 0 1 1 1"));
    assert_eq!(cron("0 0 0 * FEB-APR SAT"), cron("0 0 0 * 2-4 6"));
}

#[test_log::test]
fn five_field_spec_equals_six_field_spec_with_zero_seconds() {
    assert_eq!(cron("30 4 * * *"), cron("0 30 4 * * *"));
}
