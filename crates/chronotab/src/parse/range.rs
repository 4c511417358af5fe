//! Field and range expression compilation.
//!
//! A field is a comma-separated list of ranges; a range is
//! `(number | name | "*" | "?") ["-" (number | name)] ["/" step]`.

use crate::error::{ParseError, ParseResult};
use crate::schedule::field::expand;
use crate::schedule::{Bounds, FieldSet};

/// Compiles one whole field (a comma-separated range list) into a
/// [`FieldSet`].
///
/// Empty segments from stray commas are skipped rather than rejected. The
/// surviving ranges are ORed together; the first failing range aborts the
/// whole field.
pub(crate) fn compile_field(field: &str, bounds: Bounds) -> ParseResult<FieldSet> {
    let mut set = FieldSet::EMPTY;
    for expr in field.split(',').filter(|expr| !expr.is_empty()) {
        set = set.union(compile_range(expr, bounds)?);
    }
    Ok(set)
}

/// Compiles a single range expression into a [`FieldSet`].
fn compile_range(expr: &str, bounds: Bounds) -> ParseResult<FieldSet> {
    let parts: Vec<&str> = expr.split('/').collect();
    let (value_part, step_part) = match parts.as_slice() {
        [value] => (*value, None),
        [value, step] => (*value, Some(*step)),
        _ => {
            return Err(ParseError::TooManySlashes {
                expr: expr.to_string(),
            });
        }
    };

    let endpoints: Vec<&str> = value_part.split('-').collect();

    let (start, mut end, single, wildcard) = if endpoints[0] == "*" || endpoints[0] == "?" {
        (bounds.min(), bounds.max(), false, true)
    } else {
        match endpoints.as_slice() {
            [low] => {
                let value = parse_value(low, bounds, expr)?;
                (value, value, true, false)
            }
            [low, high] => (
                parse_value(low, bounds, expr)?,
                parse_value(high, bounds, expr)?,
                false,
                false,
            ),
            _ => {
                return Err(ParseError::TooManyHyphens {
                    expr: expr.to_string(),
                });
            }
        }
    };

    let step = match step_part {
        None => 1,
        Some(token) => {
            let step = parse_number(token, expr)?;
            if step == 0 {
                return Err(ParseError::ZeroStep {
                    expr: expr.to_string(),
                });
            }
            // A single bare value with a step means "from there to the
            // field's maximum": `N/step` compiles as `N-max/step`.
            if single {
                end = bounds.max();
            }
            step
        }
    };

    if start < bounds.min() {
        return Err(ParseError::RangeBelowMinimum {
            start,
            min: bounds.min(),
            expr: expr.to_string(),
        });
    }
    if end > bounds.max() {
        return Err(ParseError::RangeAboveMaximum {
            end,
            max: bounds.max(),
            expr: expr.to_string(),
        });
    }
    if start > end {
        return Err(ParseError::RangeInverted {
            start,
            end,
            expr: expr.to_string(),
        });
    }

    let set = FieldSet::from_bits(expand(start, end, step));
    Ok(if wildcard { set.as_wildcard() } else { set })
}

/// Parses a range endpoint: a symbolic name for the field if one exists,
/// otherwise a non-negative integer.
fn parse_value(token: &str, bounds: Bounds, expr: &str) -> ParseResult<u32> {
    if let Some(value) = bounds.name_value(token) {
        return Ok(value);
    }
    if bounds.has_names() && !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ParseError::UnknownValue {
            token: token.to_string(),
            expr: expr.to_string(),
        });
    }
    parse_number(token, expr)
}

/// Parses a non-negative integer token.
fn parse_number(token: &str, expr: &str) -> ParseResult<u32> {
    let value: i64 = token.parse().map_err(|_e| ParseError::NotANumber {
        token: token.to_string(),
        expr: expr.to_string(),
    })?;
    if value < 0 {
        return Err(ParseError::NegativeNumber {
            value,
            expr: expr.to_string(),
        });
    }
    u32::try_from(value).map_err(|_e| ParseError::NotANumber {
        token: token.to_string(),
        expr: expr.to_string(),
    })
}
