//! GCD / LCM helpers shared by simplification and common-denominator search.

use crate::error::{ArithmeticError, Result};
use crate::traits::Integer;

/// Greatest common divisor of `|a|` and `|b|` (Euclid).
///
/// `gcd(0, 0)` is defined as `0`; callers must not divide by it. The only
/// unrepresentable result is `|T::min_value()|`, from `gcd(MIN, 0)` and
/// `gcd(MIN, MIN)`, which is reported as `Overflow`.
pub fn gcd<T: Integer>(a: T, b: T) -> Result<T> {
    T::zero()
        .checked_sub(&negative_gcd(a, b))
        .ok_or(ArithmeticError::overflow("computing a GCD"))
}

/// `-gcd(a, b)`, which is representable for every pair of operands.
///
/// The remainder loop runs on non-positive values so that `T::min_value()`
/// never needs negating.
pub(crate) fn negative_gcd<T: Integer>(a: T, b: T) -> T {
    let mut a = if a > T::zero() { -a } else { a };
    let mut b = if b > T::zero() { -b } else { b };

    while !b.is_zero() {
        // MIN % -1 traps; every value is divisible by 1 anyway.
        if b == -T::one() {
            return -T::one();
        }
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// GCD of two values neither of which is `T::min_value()`.
pub(crate) fn bounded_gcd<T: Integer>(a: T, b: T) -> T {
    -negative_gcd(a, b)
}

/// Least common multiple of `|a|` and `|b|`; `lcm(0, x) == 0`.
pub fn lcm<T: Integer>(a: T, b: T) -> Result<T> {
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    let g = gcd(a, b).map_err(|_| ArithmeticError::overflow("computing an LCM"))?;
    let reduced = checked_abs(a / g).ok_or(ArithmeticError::overflow("computing an LCM"))?;
    let b_abs = checked_abs(b).ok_or(ArithmeticError::overflow("computing an LCM"))?;
    reduced
        .checked_mul(&b_abs)
        .ok_or(ArithmeticError::overflow("computing an LCM"))
}

pub(crate) fn checked_abs<T: Integer>(value: T) -> Option<T> {
    if value < T::zero() {
        T::zero().checked_sub(&value)
    } else {
        Some(value)
    }
}

pub(crate) fn checked_mul<T: Integer>(a: T, b: T, context: &'static str) -> Result<T> {
    a.checked_mul(&b).ok_or(ArithmeticError::overflow(context))
}

pub(crate) fn checked_add<T: Integer>(a: T, b: T, context: &'static str) -> Result<T> {
    a.checked_add(&b).ok_or(ArithmeticError::overflow(context))
}

pub(crate) fn checked_sub<T: Integer>(a: T, b: T, context: &'static str) -> Result<T> {
    a.checked_sub(&b).ok_or(ArithmeticError::overflow(context))
}

#[cfg(test)]
mod tests {
    use super::{bounded_gcd, checked_abs, gcd, lcm, negative_gcd};
    use crate::error::ArithmeticError;

    #[test]
    fn gcd_matches_known_values() {
        assert_eq!(gcd(48_i64, 18), Ok(6));
        assert_eq!(gcd(75_i64, 100), Ok(25));
        assert_eq!(gcd(17_i64, 5), Ok(1));
    }

    #[test]
    fn gcd_ignores_signs() {
        assert_eq!(gcd(-48_i64, 18), Ok(6));
        assert_eq!(gcd(48_i64, -18), Ok(6));
        assert_eq!(gcd(-48_i64, -18), Ok(6));
    }

    #[test]
    fn gcd_with_zero_operands() {
        assert_eq!(gcd(0_i64, 7), Ok(7));
        assert_eq!(gcd(-7_i64, 0), Ok(7));
        assert_eq!(gcd(0_i64, 0), Ok(0));
    }

    #[test]
    fn gcd_handles_min_value() {
        assert_eq!(gcd(i64::MIN, 6), Ok(2));
        assert_eq!(gcd(i64::MIN, -1), Ok(1));
        assert_eq!(gcd(i32::MIN, i32::MAX), Ok(1));
    }

    #[test]
    fn gcd_reports_unrepresentable_min_magnitude() {
        let err = gcd(i64::MIN, 0).expect_err("expected overflow");
        assert!(matches!(err, ArithmeticError::Overflow { .. }));
        assert_eq!(gcd(i64::MIN, i64::MIN).unwrap_err().kind(), "overflow");
        assert_eq!(gcd(0, i32::MIN).unwrap_err().kind(), "overflow");
        assert_eq!(negative_gcd(i64::MIN, 0), i64::MIN);
    }

    #[test]
    fn bounded_gcd_matches_gcd() {
        assert_eq!(bounded_gcd(-12_i64, 18), 6);
        assert_eq!(bounded_gcd(0_i64, 0), 0);
        assert_eq!(bounded_gcd(i64::MAX, i64::MAX), i64::MAX);
    }

    #[test]
    fn lcm_matches_known_values() {
        assert_eq!(lcm(4_i64, 3), Ok(12));
        assert_eq!(lcm(6_i64, 8), Ok(24));
        assert_eq!(lcm(-4_i64, 6), Ok(12));
        assert_eq!(lcm(0_i64, 9), Ok(0));
    }

    #[test]
    fn lcm_reports_overflow() {
        let err = lcm(i32::MAX, i32::MAX - 1).expect_err("expected overflow");
        assert!(matches!(err, ArithmeticError::Overflow { .. }));
    }

    #[test]
    fn lcm_reports_overflow_for_min_operands() {
        assert_eq!(lcm(i64::MIN, i64::MIN).unwrap_err().kind(), "overflow");
        assert_eq!(lcm(i64::MIN, 6).unwrap_err().kind(), "overflow");
        assert_eq!(lcm(i64::MIN, 0), Ok(0));
    }

    #[test]
    fn checked_abs_rejects_min() {
        assert_eq!(checked_abs(-5_i64), Some(5));
        assert_eq!(checked_abs(i64::MIN), None);
    }
}
