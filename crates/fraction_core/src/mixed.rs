//! Mixed numbers (`whole` plus a proper fraction) and conversions to and
//! from improper fractions.

use crate::error::{ArithmeticError, Result};
use crate::fraction::Fraction;
use crate::input::{parse_integer, strip_sign};
use crate::number_theory::{bounded_gcd, checked_add, checked_mul};
use crate::traits::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical mixed number: `0 <= numerator < denominator`.
///
/// `whole` carries the sign whenever it is non-zero. Values strictly between
/// -1 and 0 have `whole == 0`, so the overall sign lives in `negative`;
/// zero itself is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MixedParts<T>")]
#[serde(bound(deserialize = "T: Integer + Deserialize<'de>"))]
pub struct MixedNumber<T = i64> {
    negative: bool,
    whole: T,
    numerator: T,
    denominator: T,
}

#[derive(Deserialize)]
struct MixedParts<T> {
    #[serde(default)]
    negative: bool,
    whole: T,
    numerator: T,
    denominator: T,
}

impl<T: Integer> TryFrom<MixedParts<T>> for MixedNumber<T> {
    type Error = ArithmeticError;

    fn try_from(parts: MixedParts<T>) -> Result<Self> {
        if parts.whole.is_zero() {
            MixedNumber::with_sign(parts.negative, T::zero(), parts.numerator, parts.denominator)
        } else {
            MixedNumber::new(parts.whole, parts.numerator, parts.denominator)
        }
    }
}

fn check_parts<T: Integer>(numerator: T, denominator: T) -> Result<()> {
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    if denominator < T::zero() {
        return Err(ArithmeticError::invalid("denominator", "must be positive"));
    }
    if numerator < T::zero() {
        return Err(ArithmeticError::invalid("numerator", "must not be negative"));
    }
    Ok(())
}

/// `sign(whole) * (|whole| * denominator + numerator) / denominator`, with
/// `sign(0) = +1`. The numerator may exceed the denominator.
pub fn mixed_to_improper<T: Integer>(whole: T, numerator: T, denominator: T) -> Result<Fraction<T>> {
    check_parts(numerator, denominator)?;
    if whole == T::min_value() {
        return Err(ArithmeticError::overflow("converting to an improper fraction"));
    }
    let magnitude = improper_magnitude(whole.abs(), numerator, denominator)?;
    let numerator = if whole < T::zero() { -magnitude } else { magnitude };
    Fraction::new(numerator, denominator)
}

fn improper_magnitude<T: Integer>(whole: T, numerator: T, denominator: T) -> Result<T> {
    let scaled = checked_mul(whole, denominator, "converting to an improper fraction")?;
    checked_add(scaled, numerator, "converting to an improper fraction")
}

/// Splits `numerator / denominator` into whole and proper parts without
/// reducing the proper part.
pub fn improper_to_mixed<T: Integer>(numerator: T, denominator: T) -> Result<MixedNumber<T>> {
    Fraction::new(numerator, denominator).map(MixedNumber::from)
}

impl<T: Integer> MixedNumber<T> {
    /// Sign taken from `whole`; the fractional part must be proper.
    pub fn new(whole: T, numerator: T, denominator: T) -> Result<Self> {
        if whole == T::min_value() {
            return Err(ArithmeticError::overflow("building a mixed number"));
        }
        Self::with_sign(whole < T::zero(), whole.abs(), numerator, denominator)
    }

    /// Builds from an explicit sign and the magnitude of the whole part,
    /// which lets values such as −1/2 be expressed.
    pub fn with_sign(negative: bool, whole: T, numerator: T, denominator: T) -> Result<Self> {
        check_parts(numerator, denominator)?;
        if whole < T::zero() {
            return Err(ArithmeticError::invalid(
                "whole number",
                "must be a magnitude when the sign is given separately",
            ));
        }
        if numerator >= denominator {
            return Err(ArithmeticError::invalid(
                "numerator",
                "must be smaller than the denominator",
            ));
        }
        let is_zero = whole.is_zero() && numerator.is_zero();
        let negative = negative && !is_zero;
        Ok(Self {
            negative,
            whole: if negative { -whole } else { whole },
            numerator,
            denominator,
        })
    }

    pub fn zero() -> Self {
        Self {
            negative: false,
            whole: T::zero(),
            numerator: T::zero(),
            denominator: T::one(),
        }
    }

    pub fn whole(&self) -> T {
        self.whole
    }

    pub fn numerator(&self) -> T {
        self.numerator
    }

    pub fn denominator(&self) -> T {
        self.denominator
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.whole.is_zero() && self.numerator.is_zero()
    }

    /// True when there is no whole part, e.g. `3/4` or `-1/2`.
    pub fn is_proper_fraction(&self) -> bool {
        self.whole.is_zero()
    }

    /// The unsigned fractional part `numerator / denominator`.
    pub fn fractional_part(&self) -> Fraction<T> {
        Fraction::new(self.numerator, self.denominator).unwrap_or_else(|_| Fraction::zero())
    }

    /// Same as [`mixed_to_improper`] but honours the sign of a zero whole part.
    pub fn to_improper(&self) -> Result<Fraction<T>> {
        let magnitude = improper_magnitude(self.whole.abs(), self.numerator, self.denominator)?;
        let numerator = if self.negative { -magnitude } else { magnitude };
        Fraction::new(numerator, self.denominator)
    }

    /// Reduces the fractional part to lowest terms.
    pub fn simplified(&self) -> Self {
        if self.numerator.is_zero() {
            return Self {
                denominator: T::one(),
                ..*self
            };
        }
        let divisor = bounded_gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
            ..*self
        }
    }
}

impl<T: Integer> From<Fraction<T>> for MixedNumber<T> {
    fn from(value: Fraction<T>) -> Self {
        let negative = value.is_negative();
        // Fraction never holds MIN, so abs cannot overflow.
        let magnitude = value.numerator().abs();
        let denominator = value.denominator();
        let whole = magnitude / denominator;
        Self {
            negative,
            whole: if negative { -whole } else { whole },
            numerator: magnitude % denominator,
            denominator,
        }
    }
}

impl<T: Integer> Fraction<T> {
    pub fn to_mixed(&self) -> MixedNumber<T> {
        MixedNumber::from(*self)
    }
}

impl<T: Integer> fmt::Display for MixedNumber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        let whole = self.whole.abs();
        if self.numerator.is_zero() {
            write!(f, "{}{}", sign, whole)
        } else if whole.is_zero() {
            write!(f, "{}{}/{}", sign, self.numerator, self.denominator)
        } else {
            write!(f, "{}{} {}/{}", sign, whole, self.numerator, self.denominator)
        }
    }
}

/// Accepts `"2 3/4"`, `"-2 3/4"`, `"3/4"`, `"-1/2"`, `"7"`. An improper
/// fractional part is carried into the whole part.
impl<T: Integer> FromStr for MixedNumber<T> {
    type Err = ArithmeticError;

    fn from_str(text: &str) -> Result<Self> {
        let (negative, rest) = strip_sign(text);
        let malformed = || {
            ArithmeticError::invalid(
                "mixed number",
                format!("'{}' is not of the form 'W N/D'", text.trim()),
            )
        };

        // The whole part is whatever precedes the numerator, so spaces
        // around '/' are allowed as in `Fraction::from_str`.
        let (head, denominator) = match rest.split_once('/') {
            Some((head, denominator)) => (head, Some(denominator)),
            None => (rest, None),
        };
        let tokens: Vec<&str> = head.split_whitespace().collect();

        let (whole, numerator, denominator) = match (tokens.as_slice(), denominator) {
            ([whole], None) => (parse_integer("whole number", whole)?, T::zero(), T::one()),
            ([numerator], Some(denominator)) => (
                T::zero(),
                parse_integer("numerator", numerator)?,
                parse_integer("denominator", denominator)?,
            ),
            ([whole, numerator], Some(denominator)) => (
                parse_integer("whole number", whole)?,
                parse_integer("numerator", numerator)?,
                parse_integer("denominator", denominator)?,
            ),
            _ => return Err(malformed()),
        };
        if whole < T::zero() {
            return Err(ArithmeticError::invalid("whole number", "has more than one sign"));
        }

        let magnitude = mixed_to_improper(whole, numerator, denominator)?;
        let value = if negative { magnitude.negate() } else { magnitude };
        Ok(MixedNumber::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{improper_to_mixed, mixed_to_improper, MixedNumber};
    use crate::error::ArithmeticError;
    use crate::fraction::Fraction;

    fn parts(f: Fraction) -> (i64, i64) {
        (f.numerator(), f.denominator())
    }

    #[test]
    fn mixed_to_improper_known_value() {
        assert_eq!(parts(mixed_to_improper(2, 3, 4).unwrap()), (11, 4));
        assert_eq!(parts(mixed_to_improper(-2, 3, 4).unwrap()), (-11, 4));
        assert_eq!(parts(mixed_to_improper(0, 3, 4).unwrap()), (3, 4));
    }

    #[test]
    fn mixed_to_improper_validates_parts() {
        assert_eq!(mixed_to_improper(1_i64, 1, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(mixed_to_improper(1_i64, -1, 2).unwrap_err().kind(), "invalid_input");
        assert_eq!(mixed_to_improper(1_i64, 1, -2).unwrap_err().kind(), "invalid_input");
        assert_eq!(mixed_to_improper(i64::MAX, 1, 2).unwrap_err().kind(), "overflow");
    }

    #[test]
    fn improper_to_mixed_known_value() {
        let value = improper_to_mixed(11, 4).unwrap();
        assert_eq!(value, MixedNumber::new(2, 3, 4).unwrap());
        assert_eq!((value.whole(), value.numerator(), value.denominator()), (2, 3, 4));
    }

    #[test]
    fn improper_to_mixed_negative_values() {
        let value = improper_to_mixed(-11, 4).unwrap();
        assert_eq!((value.whole(), value.numerator(), value.denominator()), (-2, 3, 4));
        assert!(value.is_negative());

        let half = improper_to_mixed(-1, 2).unwrap();
        assert_eq!((half.whole(), half.numerator()), (0, 1));
        assert!(half.is_negative());
        assert_eq!(parts(half.to_improper().unwrap()), (-1, 2));
    }

    #[test]
    fn improper_to_mixed_keeps_unreduced_remainder() {
        let value = improper_to_mixed(10, 4).unwrap();
        assert_eq!((value.whole(), value.numerator(), value.denominator()), (2, 2, 4));
        let reduced = value.simplified();
        assert_eq!((reduced.whole(), reduced.numerator(), reduced.denominator()), (2, 1, 2));
    }

    #[test]
    fn improper_to_mixed_normalises_denominator_sign() {
        let value = improper_to_mixed(7, -2).unwrap();
        assert_eq!(value.to_string(), "-3 1/2");
    }

    #[test]
    fn zero_is_never_negative() {
        let value = MixedNumber::with_sign(true, 0_i64, 0, 5).unwrap();
        assert!(!value.is_negative());
        assert!(improper_to_mixed(0_i64, 3).unwrap().is_zero());
    }

    #[test]
    fn new_requires_proper_fraction() {
        let err = MixedNumber::new(1_i64, 5, 4).expect_err("expected improper rejection");
        assert!(err.to_string().contains("smaller than the denominator"));
    }

    #[test]
    fn display_forms() {
        assert_eq!(MixedNumber::new(2_i64, 3, 4).unwrap().to_string(), "2 3/4");
        assert_eq!(MixedNumber::new(-2_i64, 3, 4).unwrap().to_string(), "-2 3/4");
        assert_eq!(MixedNumber::with_sign(true, 0_i64, 1, 2).unwrap().to_string(), "-1/2");
        assert_eq!(MixedNumber::new(3_i64, 0, 1).unwrap().to_string(), "3");
        assert_eq!(MixedNumber::<i64>::zero().to_string(), "0");
    }

    #[test]
    fn parses_text_forms() {
        let value: MixedNumber = "2 3/4".parse().unwrap();
        assert_eq!(value, MixedNumber::new(2, 3, 4).unwrap());
        let value: MixedNumber = "-2 3/4".parse().unwrap();
        assert_eq!(value.whole(), -2);
        let value: MixedNumber = "-1/2".parse().unwrap();
        assert_eq!(value.to_string(), "-1/2");
        let value: MixedNumber = "9/4".parse().unwrap();
        assert_eq!(value.to_string(), "2 1/4");
        let value: MixedNumber = "7".parse().unwrap();
        assert_eq!(value.to_string(), "7");
    }

    #[test]
    fn parse_allows_spaces_around_slash() {
        let value: MixedNumber = "1 3 / 4".parse().unwrap();
        assert_eq!(value, MixedNumber::new(1, 3, 4).unwrap());
        let value: MixedNumber = "- 3 /4".parse().unwrap();
        assert_eq!(value.to_string(), "-3/4");
        assert_eq!("1 3/4/5".parse::<MixedNumber>().unwrap_err().kind(), "invalid_input");
        assert_eq!("/4".parse::<MixedNumber>().unwrap_err().kind(), "invalid_input");
    }

    #[test]
    fn parse_rejects_malformed_text() {
        assert_eq!("1 2 3/4".parse::<MixedNumber>().unwrap_err().kind(), "invalid_input");
        assert_eq!("1 3".parse::<MixedNumber>().unwrap_err().kind(), "invalid_input");
        assert_eq!("1 3/0".parse::<MixedNumber>(), Err(ArithmeticError::DivisionByZero));
        assert_eq!("".parse::<MixedNumber>().unwrap_err().kind(), "invalid_input");
    }

    #[test]
    fn try_from_parts_validates() {
        let err = MixedNumber::try_from(super::MixedParts {
            negative: false,
            whole: 1_i64,
            numerator: 3,
            denominator: 2,
        })
        .expect_err("improper parts rejected");
        assert_eq!(err.kind(), "invalid_input");

        let half = MixedNumber::try_from(super::MixedParts {
            negative: true,
            whole: 0_i64,
            numerator: 1,
            denominator: 2,
        })
        .expect("valid parts");
        assert_eq!(half.to_string(), "-1/2");
    }
}
