//! Interval duration parsing for `@every`.
//!
//! Grammar: one or more `<integer><unit>` groups run together, e.g.
//! `1h30m45s`. Units: `ms`, `s`, `m`, `h`.

use std::time::Duration;

use crate::error::{ParseError, ParseResult};

/// Parses an interval duration like `1h30m` or `45s`.
///
/// ## Errors
///
/// Fails with [`ParseError::DurationParse`] on empty input, a missing or
/// unknown unit, non-numeric input, or arithmetic overflow.
pub(crate) fn parse_duration(text: &str) -> ParseResult<Duration> {
    let fail = |reason: &str| ParseError::DurationParse {
        text: text.to_string(),
        reason: reason.to_string(),
    };

    if text.is_empty() {
        return Err(fail("empty duration"));
    }

    let mut chars = text.chars().peekable();
    let mut total = Duration::ZERO;

    while chars.peek().is_some() {
        let mut value: u64 = 0;
        let mut digits = 0;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or_else(|| fail("value out of range"))?;
            digits += 1;
            chars.next();
        }
        if digits == 0 {
            return Err(fail("expected a number"));
        }

        let mut unit = String::new();
        while let Some(c) = chars.peek().copied() {
            if c.is_ascii_digit() {
                break;
            }
            unit.push(c);
            chars.next();
        }

        let component = match unit.as_str() {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(
                value
                    .checked_mul(60)
                    .ok_or_else(|| fail("value out of range"))?,
            ),
            "h" => Duration::from_secs(
                value
                    .checked_mul(3600)
                    .ok_or_else(|| fail("value out of range"))?,
            ),
            "" => return Err(fail("missing unit")),
            _ => return Err(fail(&format!("unknown unit {unit:?}"))),
        };

        total = total
            .checked_add(component)
            .ok_or_else(|| fail("value out of range"))?;
    }

    Ok(total)
}
