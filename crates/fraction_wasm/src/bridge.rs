//! Form-field pipelines behind the `#[wasm_bindgen]` surface.
//!
//! Kept free of `JsValue` so they run under the native test harness.

use crate::render::RenderSettings;
use crate::views::{CalculationView, FractionView, MixedView};
use anyhow::{Context, Result};
use fraction_core::input::parse_integer;
use fraction_core::{calculate, improper_to_mixed, parse_mixed, Fraction, InputSettings, MixedNumber, Operation};

/// The three text fields of one operand as typed by the user.
#[derive(Debug, Clone, Copy)]
pub struct OperandFields<'a> {
    pub whole: &'a str,
    pub numerator: &'a str,
    pub denominator: &'a str,
}

impl<'a> OperandFields<'a> {
    fn parse(&self, settings: &InputSettings) -> fraction_core::error::Result<MixedNumber> {
        parse_mixed(self.whole, self.numerator, self.denominator, settings)
    }
}

pub fn calculate_fields(
    left: OperandFields<'_>,
    op: &str,
    right: OperandFields<'_>,
    input: &InputSettings,
    render: &RenderSettings,
) -> Result<CalculationView> {
    let left = left.parse(input).context("first operand")?;
    let op: Operation = op.parse()?;
    let right = right.parse(input).context("second operand")?;
    let calculation = calculate(&left, op, &right)?;
    Ok(CalculationView::build(&calculation, render))
}

/// Same as [`calculate_fields`] for free-form operands such as `"2 3/4"`.
pub fn calculate_expression(
    left: &str,
    op: &str,
    right: &str,
    render: &RenderSettings,
) -> Result<CalculationView> {
    let left: MixedNumber = left.parse().context("first operand")?;
    let op: Operation = op.parse()?;
    let right: MixedNumber = right.parse().context("second operand")?;
    let calculation = calculate(&left, op, &right)?;
    Ok(CalculationView::build(&calculation, render))
}

pub fn simplify(numerator: &str, denominator: &str, render: &RenderSettings) -> Result<FractionView> {
    let numerator = parse_integer("numerator", numerator)?;
    let denominator = parse_integer("denominator", denominator)?;
    let value = fraction_core::simplify(numerator, denominator)?;
    Ok(FractionView::build(&value, render))
}

pub fn mixed_to_improper(
    fields: OperandFields<'_>,
    input: &InputSettings,
    render: &RenderSettings,
) -> Result<FractionView> {
    let mixed = fields.parse(input)?;
    let value = mixed.to_improper()?;
    Ok(FractionView::build(&value, render))
}

pub fn improper_to_mixed_view(
    numerator: &str,
    denominator: &str,
    render: &RenderSettings,
) -> Result<MixedView> {
    let numerator = parse_integer("numerator", numerator)?;
    let denominator = parse_integer("denominator", denominator)?;
    let value = improper_to_mixed(numerator, denominator)?;
    Ok(MixedView::build(&value, render))
}

pub fn decimal_to_fraction(text: &str, render: &RenderSettings) -> Result<FractionView> {
    let value = Fraction::from_decimal_str(text)?;
    Ok(FractionView::build(&value, render))
}

pub fn gcd(a: &str, b: &str) -> Result<String> {
    let a: i64 = parse_integer("first number", a)?;
    let b: i64 = parse_integer("second number", b)?;
    Ok(fraction_core::gcd(a, b)?.to_string())
}

pub fn lcm(a: &str, b: &str) -> Result<String> {
    let a: i64 = parse_integer("first number", a)?;
    let b: i64 = parse_integer("second number", b)?;
    Ok(fraction_core::lcm(a, b)?.to_string())
}
