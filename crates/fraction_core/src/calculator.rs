//! Worked calculations on fractions and mixed numbers.
//!
//! [`calculate`] is the entry point used by the calculator forms: it converts
//! both operands to improper fractions, applies the operation, simplifies,
//! and converts back, recording every stage as a [`Step`].

use crate::error::{ArithmeticError, Result};
use crate::fraction::Fraction;
use crate::mixed::MixedNumber;
use crate::number_theory::bounded_gcd;
use crate::steps::{Quantity, Step, StepKind, Trace};
use crate::traits::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '−',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ArithmeticError;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "minus" | "-" | "−" => Ok(Operation::Subtract),
            "multiply" | "times" | "*" | "×" | "x" => Ok(Operation::Multiply),
            "divide" | "/" | "÷" => Ok(Operation::Divide),
            _ => Err(ArithmeticError::invalid(
                "operation",
                format!("'{}' is not one of add, subtract, multiply, divide", text),
            )),
        }
    }
}

/// Applies `op` to two fractions and returns the simplified result.
pub fn apply<T: Integer>(left: &Fraction<T>, op: Operation, right: &Fraction<T>) -> Result<Fraction<T>> {
    match op {
        Operation::Add => left.add(right),
        Operation::Subtract => left.subtract(right),
        Operation::Multiply => left.multiply(right),
        Operation::Divide => left.divide(right),
    }
}

/// Result of a worked calculation. The trace is part of the output, not a
/// debugging aid: forms display it as the worked solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Integer + Serialize",
    deserialize = "T: Integer + Deserialize<'de>"
))]
pub struct Calculation<T = i64> {
    pub operation: Operation,
    /// Simplified improper fraction.
    pub improper: Fraction<T>,
    pub mixed: MixedNumber<T>,
    pub decimal: f64,
    pub steps: Vec<Step<T>>,
}

/// Full worked calculation on two mixed numbers.
pub fn calculate<T: Integer>(
    left: &MixedNumber<T>,
    op: Operation,
    right: &MixedNumber<T>,
) -> Result<Calculation<T>> {
    let mut trace = Trace::new();

    let left_improper = left.to_improper()?;
    trace.record(
        StepKind::ConvertToImproper,
        "Convert the first mixed number to an improper fraction",
        vec![Quantity::Mixed(*left)],
        Quantity::Fraction(left_improper),
    );
    let right_improper = right.to_improper()?;
    trace.record(
        StepKind::ConvertToImproper,
        "Convert the second mixed number to an improper fraction",
        vec![Quantity::Mixed(*right)],
        Quantity::Fraction(right_improper),
    );

    finish(left_improper, op, right_improper, trace)
}

/// Worked calculation on two fractions; no conversion steps are recorded.
pub fn calculate_fractions<T: Integer>(
    left: &Fraction<T>,
    op: Operation,
    right: &Fraction<T>,
) -> Result<Calculation<T>> {
    finish(*left, op, *right, Trace::new())
}

fn finish<T: Integer>(
    left: Fraction<T>,
    op: Operation,
    right: Fraction<T>,
    mut trace: Trace<T>,
) -> Result<Calculation<T>> {
    let combined = match op {
        Operation::Add | Operation::Subtract => {
            combine_over_common_denominator(&left, op, &right, &mut trace)?
        }
        Operation::Multiply => multiply_with_trace(
            &left,
            &right,
            "Multiply the numerators together and the denominators together",
            &mut trace,
        )?,
        Operation::Divide => {
            let reciprocal = right.reciprocal()?;
            trace.record(
                StepKind::Reciprocal,
                "Replace the divisor with its reciprocal",
                vec![Quantity::Fraction(right)],
                Quantity::Fraction(reciprocal),
            );
            multiply_with_trace(
                &left,
                &reciprocal,
                "Multiply the first fraction by the reciprocal",
                &mut trace,
            )?
        }
    };

    let improper = combined.simplified();
    let divisor = bounded_gcd(combined.numerator(), combined.denominator());
    let description = if combined == improper {
        "The fraction is already in lowest terms".to_string()
    } else {
        format!(
            "Divide the numerator and denominator by their greatest common divisor, {}",
            divisor
        )
    };
    trace.record(
        StepKind::Simplify,
        description,
        vec![Quantity::Fraction(combined)],
        Quantity::Fraction(improper),
    );

    let mixed = improper.to_mixed();
    trace.record(
        StepKind::ConvertToMixed,
        "Convert the improper fraction back to a mixed number",
        vec![Quantity::Fraction(improper)],
        Quantity::Mixed(mixed),
    );

    debug!(
        target: "fraction_core",
        %op,
        %left,
        %right,
        result = %improper,
        "calculation finished"
    );

    Ok(Calculation {
        operation: op,
        improper,
        mixed,
        decimal: improper.to_f64(),
        steps: trace.into_steps(),
    })
}

/// Records the literal product; when that overflows, common factors are
/// cancelled across the two fractions first.
fn multiply_with_trace<T: Integer>(
    left: &Fraction<T>,
    right: &Fraction<T>,
    description: &str,
    trace: &mut Trace<T>,
) -> Result<Fraction<T>> {
    let (product, description) = match left.multiply_unreduced(right) {
        Ok(product) => (product, description.to_string()),
        Err(ArithmeticError::Overflow { .. }) => (
            left.multiply_cross_cancelled(right)?,
            format!("{}, cancelling common factors first", description),
        ),
        Err(err) => return Err(err),
    };
    trace.record(
        StepKind::Combine,
        description,
        vec![Quantity::Fraction(*left), Quantity::Fraction(*right)],
        Quantity::Fraction(product),
    );
    Ok(product)
}

fn combine_over_common_denominator<T: Integer>(
    left: &Fraction<T>,
    op: Operation,
    right: &Fraction<T>,
    trace: &mut Trace<T>,
) -> Result<Fraction<T>> {
    let (lcd, left_scaled, right_scaled) = left.common_denominator(right)?;
    trace.record(
        StepKind::CommonDenominator,
        "Find the least common multiple of the denominators",
        vec![
            Quantity::Integer(left.denominator()),
            Quantity::Integer(right.denominator()),
        ],
        Quantity::Integer(lcd),
    );
    trace.record(
        StepKind::RewriteOverCommonDenominator,
        "Rewrite the first fraction over the common denominator",
        vec![Quantity::Fraction(*left)],
        Quantity::Fraction(left_scaled),
    );
    trace.record(
        StepKind::RewriteOverCommonDenominator,
        "Rewrite the second fraction over the common denominator",
        vec![Quantity::Fraction(*right)],
        Quantity::Fraction(right_scaled),
    );

    let subtract = op == Operation::Subtract;
    let combined = left_scaled.combine_numerators(&right_scaled, subtract)?;
    let description = if subtract {
        "Subtract the numerators and keep the common denominator"
    } else {
        "Add the numerators and keep the common denominator"
    };
    trace.record(
        StepKind::Combine,
        description,
        vec![Quantity::Fraction(left_scaled), Quantity::Fraction(right_scaled)],
        Quantity::Fraction(combined),
    );
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::{apply, calculate, calculate_fractions, Operation};
    use crate::error::ArithmeticError;
    use crate::fraction::Fraction;
    use crate::mixed::MixedNumber;
    use crate::steps::{Quantity, StepKind};

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).expect("valid fraction")
    }

    fn mixed(w: i64, n: i64, d: i64) -> MixedNumber {
        MixedNumber::new(w, n, d).expect("valid mixed number")
    }

    fn parts(f: Fraction) -> (i64, i64) {
        (f.numerator(), f.denominator())
    }

    #[test]
    fn operation_parses_names_and_symbols() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!(" Divide ".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("×".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("÷".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("−".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        let err = "modulo".parse::<Operation>().expect_err("unknown operation");
        assert!(err.to_string().contains("invalid operation"));
    }

    #[test]
    fn operation_round_trips_through_name() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
            assert_eq!(op.symbol().to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn apply_matches_scenarios() {
        assert_eq!(parts(apply(&frac(1, 4), Operation::Add, &frac(2, 3)).unwrap()), (11, 12));
        assert_eq!(parts(apply(&frac(2, 3), Operation::Multiply, &frac(3, 4)).unwrap()), (1, 2));
        assert_eq!(parts(apply(&frac(2, 3), Operation::Divide, &frac(3, 4)).unwrap()), (8, 9));
        assert_eq!(
            parts(apply(&frac(2, 3), Operation::Subtract, &frac(3, 4)).unwrap()),
            (-1, 12)
        );
    }

    #[test]
    fn addition_trace_follows_algorithm() {
        let result = calculate(&mixed(0, 1, 4), Operation::Add, &mixed(0, 2, 3)).unwrap();
        let kinds: Vec<StepKind> = result.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::ConvertToImproper,
                StepKind::ConvertToImproper,
                StepKind::CommonDenominator,
                StepKind::RewriteOverCommonDenominator,
                StepKind::RewriteOverCommonDenominator,
                StepKind::Combine,
                StepKind::Simplify,
                StepKind::ConvertToMixed,
            ]
        );
        assert_eq!(result.steps[2].after, Quantity::Integer(12));
        assert_eq!(result.steps[3].after, Quantity::Fraction(frac(3, 12)));
        assert_eq!(result.steps[4].after, Quantity::Fraction(frac(8, 12)));
        assert_eq!(result.steps[5].after, Quantity::Fraction(frac(11, 12)));
        assert_eq!(parts(result.improper), (11, 12));
        assert_eq!(result.mixed, mixed(0, 11, 12));
    }

    #[test]
    fn mixed_addition_carries_into_whole() {
        let result = calculate(&mixed(2, 3, 4), Operation::Add, &mixed(1, 1, 2)).unwrap();
        assert_eq!(result.steps[0].after, Quantity::Fraction(frac(11, 4)));
        assert_eq!(result.steps[1].after, Quantity::Fraction(frac(3, 2)));
        assert_eq!(parts(result.improper), (17, 4));
        assert_eq!(result.mixed.to_string(), "4 1/4");
        assert!((result.decimal - 4.25).abs() < 1e-12);
    }

    #[test]
    fn multiplication_simplifies_product() {
        let result = calculate_fractions(&frac(2, 3), Operation::Multiply, &frac(3, 4)).unwrap();
        let kinds: Vec<StepKind> = result.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Combine, StepKind::Simplify, StepKind::ConvertToMixed]
        );
        assert_eq!(result.steps[0].after, Quantity::Fraction(frac(6, 12)));
        assert!(result.steps[1].description.contains("greatest common divisor, 6"));
        assert_eq!(parts(result.improper), (1, 2));
    }

    #[test]
    fn division_records_reciprocal() {
        let result = calculate_fractions(&frac(2, 3), Operation::Divide, &frac(3, 4)).unwrap();
        assert_eq!(result.steps[0].kind, StepKind::Reciprocal);
        assert_eq!(result.steps[0].after, Quantity::Fraction(frac(4, 3)));
        assert_eq!(result.steps[1].after, Quantity::Fraction(frac(8, 9)));
        assert_eq!(result.steps[2].description, "The fraction is already in lowest terms");
        assert_eq!(parts(result.improper), (8, 9));
    }

    #[test]
    fn negative_results_keep_sign_in_mixed_form() {
        let result = calculate(&mixed(1, 1, 4), Operation::Subtract, &mixed(1, 3, 4)).unwrap();
        assert_eq!(parts(result.improper), (-1, 2));
        assert!(result.mixed.is_negative());
        assert_eq!(result.mixed.to_string(), "-1/2");
    }

    #[test]
    fn dividing_by_zero_mixed_number_fails_without_result() {
        let err = calculate(&mixed(3, 1, 2), Operation::Divide, &MixedNumber::zero())
            .expect_err("division by zero");
        assert_eq!(err, ArithmeticError::DivisionByZero);
    }

    #[test]
    fn large_products_cancel_before_multiplying() {
        let calculation =
            calculate_fractions(&frac(i64::MAX, 2), Operation::Multiply, &frac(2, i64::MAX)).unwrap();
        assert_eq!(parts(calculation.improper), (1, 1));
        let combine = &calculation.steps[0];
        assert_eq!(combine.kind, StepKind::Combine);
        assert!(combine.description.contains("cancelling common factors"));

        let small = calculate_fractions(&frac(2, 3), Operation::Multiply, &frac(3, 4)).unwrap();
        assert!(!small.steps[0].description.contains("cancelling"));
        assert_eq!(small.steps[0].after, Quantity::Fraction(frac(6, 12)));
    }

    #[test]
    fn zero_result_simplifies_to_zero_over_one() {
        let result = calculate(&mixed(1, 1, 2), Operation::Subtract, &mixed(1, 1, 2)).unwrap();
        assert_eq!(parts(result.improper), (0, 1));
        assert!(result.mixed.is_zero());
        assert!(!result.mixed.is_negative());
    }
}
