//! Cron spec parse errors.

use thiserror::Error;

/// Result type for cron spec compilation.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// An error produced while compiling a cron spec.
///
/// Every variant names the offending token or expression and the constraint
/// it violated. Compilation is all-or-nothing: the first error aborts the
/// whole spec and no partial schedule is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The `TZ=` prefix named a timezone the IANA database does not know.
    #[error("bad timezone {name:?}: not a recognized IANA zone name")]
    InvalidTimezone {
        /// The unresolvable zone name.
        name: String,
    },

    /// The spec did not contain 5 or 6 whitespace-separated fields.
    #[error("expected 5 or 6 fields, found {count}: {spec:?}")]
    FieldCount {
        /// Number of fields actually found.
        count: usize,
        /// The spec as seen by the field splitter.
        spec: String,
    },

    /// A token was neither a number nor a name known for this field.
    #[error("unknown value {token:?} in expression {expr:?}")]
    UnknownValue {
        /// The unrecognized token.
        token: String,
        /// The range expression it appeared in.
        expr: String,
    },

    /// A token could not be parsed as an integer.
    #[error("failed to parse {token:?} as an integer in expression {expr:?}")]
    NotANumber {
        /// The non-numeric token.
        token: String,
        /// The range expression it appeared in.
        expr: String,
    },

    /// A negative number appeared where only non-negative values are legal.
    #[error("negative number ({value}) not allowed: {expr:?}")]
    NegativeNumber {
        /// The offending value.
        value: i64,
        /// The range expression it appeared in.
        expr: String,
    },

    /// More than one `-` separator in a single range expression.
    #[error("too many hyphens: {expr:?}")]
    TooManyHyphens {
        /// The offending range expression.
        expr: String,
    },

    /// More than one `/` separator in a single range expression.
    #[error("too many slashes: {expr:?}")]
    TooManySlashes {
        /// The offending range expression.
        expr: String,
    },

    /// A step of zero would never advance through the range.
    #[error("step of zero not allowed: {expr:?}")]
    ZeroStep {
        /// The offending range expression.
        expr: String,
    },

    /// The range started below the field's minimum legal value.
    #[error("beginning of range ({start}) below minimum ({min}): {expr:?}")]
    RangeBelowMinimum {
        /// Start of the requested range.
        start: u32,
        /// Minimum legal value for the field.
        min: u32,
        /// The offending range expression.
        expr: String,
    },

    /// The range ended above the field's maximum legal value.
    #[error("end of range ({end}) above maximum ({max}): {expr:?}")]
    RangeAboveMaximum {
        /// End of the requested range.
        end: u32,
        /// Maximum legal value for the field.
        max: u32,
        /// The offending range expression.
        expr: String,
    },

    /// The range's start was beyond its end.
    #[error("beginning of range ({start}) beyond end of range ({end}): {expr:?}")]
    RangeInverted {
        /// Start of the requested range.
        start: u32,
        /// End of the requested range.
        end: u32,
        /// The offending range expression.
        expr: String,
    },

    /// An `@`-prefixed spec matched no known descriptor.
    #[error("unrecognized descriptor: {spec:?}")]
    UnrecognizedDescriptor {
        /// The unmatched descriptor spec.
        spec: String,
    },

    /// The text after `@every ` was not a valid duration.
    #[error("failed to parse duration {text:?}: {reason}")]
    DurationParse {
        /// The unparseable duration text.
        text: String,
        /// What made it unparseable.
        reason: String,
    },
}
