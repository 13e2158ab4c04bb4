pub mod calculator;
pub mod error;
pub mod fraction;
pub mod input;
pub mod mixed;
pub mod number_theory;
pub mod steps;
/// The `fraction_core` crate provides the exact arithmetic engine behind the
/// fraction and mixed-number calculators.
/// Every operation is a pure function of its inputs; nothing is cached or shared.
///
/// Key components:
/// - **Traits**: `Integer` (integer type abstraction over `i32`, `i64`, `i128`, ...).
/// - **Fraction / MixedNumber**: validated value types with GCD-based simplification.
/// - **Calculator**: the four operations with an ordered trace of worked steps.
/// - **Input**: validation of raw form fields before arithmetic runs.
pub mod traits;

pub use calculator::{apply, calculate, calculate_fractions, Calculation, Operation};
pub use error::ArithmeticError;
pub use fraction::{simplify, Fraction};
pub use input::{parse_mixed, InputSettings};
pub use mixed::{improper_to_mixed, mixed_to_improper, MixedNumber};
pub use number_theory::{gcd, lcm};
pub use steps::{Quantity, Step, StepKind};
