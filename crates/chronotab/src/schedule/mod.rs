//! Compiled schedule models.
//!
//! These types are the output of [`crate::parse::parse`]: immutable values a
//! next-occurrence calculator reads, never mutates. They are plain `Copy`
//! data and safe to share across threads.

mod bounds;
pub(crate) mod field;

pub use bounds::Bounds;
pub use field::FieldSet;

use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::ParseError;

/// A compiled schedule.
///
/// Either a crontab-style bitmask spec or a fixed interval from `@every`.
/// Both variants are constructed exclusively by [`crate::parse::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Bitmask schedule compiled from a 5/6-field crontab spec or a symbolic
    /// descriptor.
    Cron(CronSchedule),
    /// Fixed-period interval schedule from `@every <duration>`.
    Every(EverySchedule),
}

impl FromStr for Schedule {
    type Err = ParseError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        crate::parse::parse(spec)
    }
}

/// The timezone a compiled schedule is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRef {
    /// The process-local timezone; used when no `TZ=` prefix was given.
    Local,
    /// An explicit IANA timezone from a `TZ=` prefix.
    Tz(Tz),
}

/// A crontab spec compiled down to one [`FieldSet`] per time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronSchedule {
    /// Permitted seconds (0–59).
    pub second: FieldSet,
    /// Permitted minutes (0–59).
    pub minute: FieldSet,
    /// Permitted hours (0–23).
    pub hour: FieldSet,
    /// Permitted days of the month (1–31).
    pub day_of_month: FieldSet,
    /// Permitted months (1–12).
    pub month: FieldSet,
    /// Permitted days of the week (0–6, Sunday = 0).
    pub day_of_week: FieldSet,
    /// Timezone the schedule is evaluated in.
    pub timezone: ZoneRef,
}

/// A fixed-interval schedule: fires every `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EverySchedule {
    /// The interval between fires.
    pub period: Duration,
}

impl EverySchedule {
    /// Creates an interval schedule with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }
}
