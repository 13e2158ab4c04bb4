//! Presentation of engine values as plain text or LaTeX markup.

use fraction_core::{Fraction, MixedNumber, Operation, Quantity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Markup {
    #[default]
    Plain,
    Latex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub markup: Markup,
    pub include_steps: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            markup: Markup::Plain,
            include_steps: true,
        }
    }
}

pub fn render_fraction(value: &Fraction, markup: Markup) -> String {
    match markup {
        Markup::Plain => value.to_string(),
        Markup::Latex => {
            if value.denominator() == 1 {
                return value.numerator().to_string();
            }
            let sign = if value.is_negative() { "-" } else { "" };
            format!(
                "{}\\frac{{{}}}{{{}}}",
                sign,
                value.numerator().abs(),
                value.denominator()
            )
        }
    }
}

pub fn render_mixed(value: &MixedNumber, markup: Markup) -> String {
    match markup {
        Markup::Plain => value.to_string(),
        Markup::Latex => {
            let sign = if value.is_negative() { "-" } else { "" };
            let whole = value.whole().abs();
            if value.numerator() == 0 {
                format!("{}{}", sign, whole)
            } else if whole == 0 {
                format!(
                    "{}\\frac{{{}}}{{{}}}",
                    sign,
                    value.numerator(),
                    value.denominator()
                )
            } else {
                format!(
                    "{}{}\\frac{{{}}}{{{}}}",
                    sign,
                    whole,
                    value.numerator(),
                    value.denominator()
                )
            }
        }
    }
}

pub fn render_quantity(value: &Quantity, markup: Markup) -> String {
    match value {
        Quantity::Integer(n) => n.to_string(),
        Quantity::Fraction(f) => render_fraction(f, markup),
        Quantity::Mixed(m) => render_mixed(m, markup),
    }
}

pub fn render_operation(op: Operation, markup: Markup) -> String {
    match (markup, op) {
        (Markup::Plain, op) => op.symbol().to_string(),
        (Markup::Latex, Operation::Add) => "+".to_string(),
        (Markup::Latex, Operation::Subtract) => "-".to_string(),
        (Markup::Latex, Operation::Multiply) => "\\times".to_string(),
        (Markup::Latex, Operation::Divide) => "\\div".to_string(),
    }
}
