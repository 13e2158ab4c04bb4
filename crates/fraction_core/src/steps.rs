use crate::fraction::Fraction;
use crate::mixed::MixedNumber;
use crate::traits::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// The algorithmic stage a [`Step`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    ConvertToImproper,
    CommonDenominator,
    RewriteOverCommonDenominator,
    Reciprocal,
    Combine,
    Simplify,
    ConvertToMixed,
}

/// A value shown before or after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[serde(bound(
    serialize = "T: Integer + Serialize",
    deserialize = "T: Integer + Deserialize<'de>"
))]
pub enum Quantity<T = i64> {
    Integer(T),
    Fraction(Fraction<T>),
    Mixed(MixedNumber<T>),
}

impl<T: Integer> fmt::Display for Quantity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Integer(value) => write!(f, "{}", value),
            Quantity::Fraction(value) => write!(f, "{}", value),
            Quantity::Mixed(value) => write!(f, "{}", value),
        }
    }
}

/// One worked step: plain-prose description plus the values it consumed
/// and produced. Markup is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Integer + Serialize",
    deserialize = "T: Integer + Deserialize<'de>"
))]
pub struct Step<T = i64> {
    pub kind: StepKind,
    pub description: String,
    pub before: Vec<Quantity<T>>,
    pub after: Quantity<T>,
}

/// Ordered collector for the steps of one calculation.
#[derive(Debug)]
pub(crate) struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T: Integer> Trace<T> {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn record(
        &mut self,
        kind: StepKind,
        description: impl Into<String>,
        before: Vec<Quantity<T>>,
        after: Quantity<T>,
    ) {
        let description = description.into();
        trace!(target: "fraction_core", ?kind, %after, "{}", description);
        self.steps.push(Step {
            kind,
            description,
            before,
            after,
        });
    }

    pub(crate) fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}
