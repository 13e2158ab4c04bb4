//! Exact fractions with a positive denominator.

use crate::error::{ArithmeticError, Result};
use crate::input::parse_integer;
use crate::number_theory::{bounded_gcd, checked_add, checked_mul, checked_sub, lcm};
use crate::traits::Integer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// `numerator / denominator` with the sign carried by the numerator.
///
/// A `Fraction` is not necessarily in lowest terms: intermediate values of a
/// worked calculation (e.g. `3/12` after rewriting over a common denominator)
/// are kept as-is so they can be shown. Use [`Fraction::simplified`] or
/// [`simplify`] for the canonical form. Equality is structural, so `2/4` and
/// `1/2` compare unequal; use [`Fraction::cmp_value`] to compare values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionParts<T>")]
#[serde(bound(deserialize = "T: Integer + Deserialize<'de>"))]
pub struct Fraction<T = i64> {
    numerator: T,
    denominator: T,
}

#[derive(Deserialize)]
struct FractionParts<T> {
    numerator: T,
    denominator: T,
}

impl<T: Integer> TryFrom<FractionParts<T>> for Fraction<T> {
    type Error = ArithmeticError;

    fn try_from(parts: FractionParts<T>) -> Result<Self> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

/// Reduces `numerator / denominator` to lowest terms with a positive
/// denominator. `simplify(0, d)` is `0/1`.
pub fn simplify<T: Integer>(numerator: T, denominator: T) -> Result<Fraction<T>> {
    Fraction::new(numerator, denominator).map(|f| f.simplified())
}

impl<T: Integer> Fraction<T> {
    /// Validates and sign-normalises without reducing.
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        // |MIN| is not representable, which sign flips and GCDs rely on.
        if numerator == T::min_value() || denominator == T::min_value() {
            return Err(ArithmeticError::overflow("building a fraction"));
        }
        if denominator < T::zero() {
            Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            })
        } else {
            Ok(Self {
                numerator,
                denominator,
            })
        }
    }

    pub fn integer(value: T) -> Result<Self> {
        Self::new(value, T::one())
    }

    pub fn zero() -> Self {
        Self {
            numerator: T::zero(),
            denominator: T::one(),
        }
    }

    pub fn one() -> Self {
        Self {
            numerator: T::one(),
            denominator: T::one(),
        }
    }

    pub fn numerator(&self) -> T {
        self.numerator
    }

    pub fn denominator(&self) -> T {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < T::zero()
    }

    pub fn is_integer(&self) -> bool {
        (self.numerator % self.denominator).is_zero()
    }

    /// True when the numerator and denominator share no factor (and zero is `0/1`).
    pub fn is_simplified(&self) -> bool {
        bounded_gcd(self.numerator, self.denominator) == T::one()
    }

    /// Lowest-terms copy of this fraction.
    pub fn simplified(&self) -> Self {
        if self.numerator.is_zero() {
            return Self::zero();
        }
        let divisor = bounded_gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }

    /// Swaps numerator and denominator; zero has no reciprocal.
    pub fn reciprocal(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Self::new(self.denominator, self.numerator)
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator.as_f64() / self.denominator.as_f64()
    }

    /// Rewrites both fractions over their least common denominator.
    ///
    /// Returns `(lcd, self', other')` where the primed fractions have
    /// denominator `lcd` and the same values as the inputs.
    pub fn common_denominator(&self, other: &Self) -> Result<(T, Self, Self)> {
        let lcd = lcm(self.denominator, other.denominator)?;
        let left = self.scale_to(lcd)?;
        let right = other.scale_to(lcd)?;
        Ok((lcd, left, right))
    }

    fn scale_to(&self, denominator: T) -> Result<Self> {
        let factor = denominator / self.denominator;
        let numerator = checked_mul(
            self.numerator,
            factor,
            "rewriting over a common denominator",
        )?;
        Self::new(numerator, denominator)
    }

    /// Adds (or subtracts) numerators of two fractions that already share a
    /// denominator. The result is not reduced.
    pub(crate) fn combine_numerators(&self, other: &Self, subtract: bool) -> Result<Self> {
        debug_assert_eq!(self.denominator, other.denominator);
        let numerator = if subtract {
            checked_sub(self.numerator, other.numerator, "subtracting fractions")?
        } else {
            checked_add(self.numerator, other.numerator, "adding fractions")?
        };
        Self::new(numerator, self.denominator)
    }

    /// Multiplies numerators and denominators without reducing.
    pub(crate) fn multiply_unreduced(&self, other: &Self) -> Result<Self> {
        let numerator = checked_mul(self.numerator, other.numerator, "multiplying fractions")?;
        let denominator = checked_mul(
            self.denominator,
            other.denominator,
            "multiplying fractions",
        )?;
        Self::new(numerator, denominator)
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        let (_, left, right) = self.common_denominator(other)?;
        left.combine_numerators(&right, false).map(|f| f.simplified())
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        let (_, left, right) = self.common_denominator(other)?;
        left.combine_numerators(&right, true).map(|f| f.simplified())
    }

    /// Cancels `gcd(n1, d2)` and `gcd(n2, d1)` before multiplying, so a
    /// product overflows only when its cross-reduced terms do.
    pub(crate) fn multiply_cross_cancelled(&self, other: &Self) -> Result<Self> {
        let left = bounded_gcd(self.numerator, other.denominator);
        let right = bounded_gcd(other.numerator, self.denominator);
        let numerator = checked_mul(
            self.numerator / left,
            other.numerator / right,
            "multiplying fractions",
        )?;
        let denominator = checked_mul(
            self.denominator / right,
            other.denominator / left,
            "multiplying fractions",
        )?;
        Self::new(numerator, denominator)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_cross_cancelled(other).map(|f| f.simplified())
    }

    /// `n1*d2 / d1*n2`; dividing by a zero fraction is an error.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        let reciprocal = other.reciprocal()?;
        self.multiply(&reciprocal)
    }

    /// Compares by value without cross multiplication, so it cannot overflow.
    ///
    /// Walks the continued-fraction expansions of both values: equal floor
    /// quotients defer to the reciprocals of the remainders, which flips the
    /// ordering at each level.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let (mut a, mut b) = (self.numerator, self.denominator);
        let (mut c, mut d) = (other.numerator, other.denominator);
        let mut flipped = false;

        loop {
            let (q1, r1) = floor_div_rem(a, b);
            let (q2, r2) = floor_div_rem(c, d);
            let ordering = match q1.cmp(&q2) {
                Ordering::Equal => match (r1.is_zero(), r2.is_zero()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => {
                        a = b;
                        b = r1;
                        c = d;
                        d = r2;
                        flipped = !flipped;
                        continue;
                    }
                },
                other => other,
            };
            return if flipped { ordering.reverse() } else { ordering };
        }
    }

    /// Exact conversion of a terminating decimal such as `"-1.25"`.
    pub fn from_decimal_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ArithmeticError::invalid("decimal", "has no digits"));
        }
        if !int_part
            .chars()
            .chain(frac_part.chars())
            .all(|c| c.is_ascii_digit())
        {
            return Err(ArithmeticError::invalid(
                "decimal",
                format!("'{}' is not a decimal number", text),
            ));
        }

        let ten = num_traits::cast::<u8, T>(10)
            .ok_or(ArithmeticError::overflow("converting a decimal"))?;
        let mut denominator = T::one();
        for _ in 0..frac_part.len() {
            denominator = checked_mul(denominator, ten, "converting a decimal")?;
        }

        let whole: T = if int_part.is_empty() {
            T::zero()
        } else {
            parse_integer("decimal", int_part)?
        };
        let fraction: T = if frac_part.is_empty() {
            T::zero()
        } else {
            parse_integer("decimal", frac_part)?
        };
        let scaled = checked_mul(whole, denominator, "converting a decimal")?;
        let magnitude = checked_add(scaled, fraction, "converting a decimal")?;
        let numerator = if negative { -magnitude } else { magnitude };
        simplify(numerator, denominator)
    }
}

fn floor_div_rem<T: Integer>(a: T, b: T) -> (T, T) {
    let q = a / b;
    let r = a % b;
    if r < T::zero() {
        (q - T::one(), r + b)
    } else {
        (q, r)
    }
}

impl<T: Integer> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == T::one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Accepts `"3/4"`, `"-3 / 4"`, integers, and terminating decimals.
impl<T: Integer> FromStr for Fraction<T> {
    type Err = ArithmeticError;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Some((numerator, denominator)) = text.split_once('/') {
            let numerator = parse_integer("numerator", numerator)?;
            let denominator = parse_integer("denominator", denominator)?;
            return Self::new(numerator, denominator);
        }
        if text.contains('.') {
            return Self::from_decimal_str(text);
        }
        Self::integer(parse_integer("fraction", text)?)
    }
}
