//! JS-facing payloads. Integers travel as decimal strings so that values
//! beyond 2^53 survive the trip into JavaScript numbers.

use crate::render::{render_fraction, render_mixed, render_operation, render_quantity, RenderSettings};
use fraction_core::{ArithmeticError, Calculation, Fraction, MixedNumber, Step, StepKind};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FractionView {
    pub numerator: String,
    pub denominator: String,
    pub text: String,
}

impl FractionView {
    pub fn build(value: &Fraction, settings: &RenderSettings) -> Self {
        Self {
            numerator: value.numerator().to_string(),
            denominator: value.denominator().to_string(),
            text: render_fraction(value, settings.markup),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MixedView {
    pub negative: bool,
    pub whole: String,
    pub numerator: String,
    pub denominator: String,
    pub text: String,
}

impl MixedView {
    pub fn build(value: &MixedNumber, settings: &RenderSettings) -> Self {
        Self {
            negative: value.is_negative(),
            whole: value.whole().to_string(),
            numerator: value.numerator().to_string(),
            denominator: value.denominator().to_string(),
            text: render_mixed(value, settings.markup),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub kind: StepKind,
    pub description: String,
    pub before: Vec<String>,
    pub after: String,
}

impl StepView {
    pub fn build(step: &Step, settings: &RenderSettings) -> Self {
        Self {
            kind: step.kind,
            description: step.description.clone(),
            before: step
                .before
                .iter()
                .map(|q| render_quantity(q, settings.markup))
                .collect(),
            after: render_quantity(&step.after, settings.markup),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationView {
    pub operation: String,
    pub symbol: String,
    pub improper: FractionView,
    pub mixed: MixedView,
    pub decimal: f64,
    pub steps: Vec<StepView>,
}

impl CalculationView {
    pub fn build(calculation: &Calculation, settings: &RenderSettings) -> Self {
        let steps = if settings.include_steps {
            calculation
                .steps
                .iter()
                .map(|step| StepView::build(step, settings))
                .collect()
        } else {
            Vec::new()
        };
        Self {
            operation: calculation.operation.name().to_string(),
            symbol: render_operation(calculation.operation, settings.markup),
            improper: FractionView::build(&calculation.improper, settings),
            mixed: MixedView::build(&calculation.mixed, settings),
            decimal: calculation.decimal,
            steps,
        }
    }
}

/// Error payload thrown to JavaScript. `kind` decides whether the UI shows
/// an inline field message (`invalid_input`) or blocks the result.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub kind: &'static str,
    pub field: Option<String>,
    pub message: String,
}

impl ErrorView {
    pub fn build(err: &anyhow::Error) -> Self {
        let message = format!("{:#}", err);
        match err.downcast_ref::<ArithmeticError>() {
            Some(arithmetic) => Self {
                kind: arithmetic.kind(),
                field: match arithmetic {
                    ArithmeticError::InvalidInput { field, .. } => Some(field.clone()),
                    _ => None,
                },
                message,
            },
            None => Self {
                kind: "internal",
                field: None,
                message,
            },
        }
    }
}
