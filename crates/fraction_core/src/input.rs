//! Validation of raw form fields before any arithmetic runs.

use crate::error::{ArithmeticError, Result};
use crate::mixed::{mixed_to_improper, MixedNumber};
use crate::traits::Integer;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Treat an empty whole/numerator field as 0 and an empty denominator as 1.
    pub blank_as_zero: bool,
    /// Accept a fractional part such as `5/4` and carry it into the whole part.
    pub allow_improper_parts: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            blank_as_zero: true,
            allow_improper_parts: true,
        }
    }
}

/// Parses a base-10 integer field, distinguishing garbage from overflow.
pub fn parse_integer<T: Integer>(field: &str, text: &str) -> Result<T> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ArithmeticError::invalid(field, "is required"));
    }
    T::from_str_radix(text, 10).map_err(|_| {
        let digits = text
            .strip_prefix(|c: char| c == '-' || c == '+')
            .unwrap_or(text);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            ArithmeticError::overflow("reading a number")
        } else {
            ArithmeticError::invalid(field, format!("'{}' is not a whole number", text))
        }
    })
}

fn parse_field<T: Integer>(
    field: &str,
    text: &str,
    blank_default: T,
    settings: &InputSettings,
) -> Result<T> {
    if text.trim().is_empty() && settings.blank_as_zero {
        return Ok(blank_default);
    }
    parse_integer(field, text)
}

/// Splits a leading minus sign (ASCII or U+2212) off a trimmed field.
pub(crate) fn strip_sign(text: &str) -> (bool, &str) {
    let text = text.trim();
    match text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('\u{2212}'))
    {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    }
}

/// Builds a canonical mixed number from the three form fields of one operand.
///
/// The sign is taken from the whole field, so `-0` with `1/2` is −1/2.
pub fn parse_mixed<T: Integer>(
    whole: &str,
    numerator: &str,
    denominator: &str,
    settings: &InputSettings,
) -> Result<MixedNumber<T>> {
    let (negative, whole_digits) = strip_sign(whole);
    if negative && whole_digits.is_empty() {
        return Err(ArithmeticError::invalid("whole number", "has a sign but no digits"));
    }
    let whole: T = parse_field("whole number", whole_digits, T::zero(), settings)?;
    if whole < T::zero() {
        return Err(ArithmeticError::invalid("whole number", "has more than one sign"));
    }

    let numerator: T = parse_field("numerator", numerator, T::zero(), settings)?;
    if numerator < T::zero() {
        return Err(ArithmeticError::invalid(
            "numerator",
            "must not be negative; put the sign on the whole number",
        ));
    }

    let denominator: T = parse_field("denominator", denominator, T::one(), settings)?;
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    if denominator < T::zero() {
        return Err(ArithmeticError::invalid("denominator", "must be positive"));
    }

    if numerator >= denominator && !settings.allow_improper_parts {
        return Err(ArithmeticError::invalid(
            "numerator",
            "must be smaller than the denominator",
        ));
    }

    let magnitude = mixed_to_improper(whole, numerator, denominator)?;
    let value = if negative { magnitude.negate() } else { magnitude };
    let mixed = MixedNumber::from(value);
    debug!(target: "fraction_core", operand = %mixed, "parsed mixed-number input");
    Ok(mixed)
}
