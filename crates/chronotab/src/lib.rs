//! Crontab expression compiler.
//!
//! Compiles textual cron specs into immutable, bitmask-backed schedule
//! values. It accepts
//! - full 5/6-field crontab specs, e.g. `"0 30 4 * * *"` (the seconds field
//!   is optional and defaults to `0`),
//! - symbolic descriptors, e.g. `"@daily"`,
//! - interval shorthand, e.g. `"@every 1h30m"`,
//! - an optional leading `TZ=<name> ` prefix naming the IANA timezone the
//!   schedule is evaluated in.
//!
//! The output is a [`Schedule`]: either a [`CronSchedule`] exposing one
//! [`FieldSet`] per time field plus the timezone, or an [`EverySchedule`]
//! carrying a fixed period. Computing fire times from a compiled schedule is
//! the consumer's concern; this crate only compiles and validates.

pub mod error;
pub mod parse;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseResult};
pub use parse::parse;
pub use schedule::{Bounds, CronSchedule, EverySchedule, FieldSet, Schedule, ZoneRef};
