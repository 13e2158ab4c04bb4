use thiserror::Error;

/// Failures raised by the arithmetic engine and its input boundary.
///
/// `InvalidInput` is meant to be shown inline next to the offending field,
/// `DivisionByZero` and `Overflow` block the whole result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow while {context}")]
    Overflow { context: &'static str },
}

impl ArithmeticError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &'static str) -> Self {
        Self::Overflow { context }
    }

    /// Stable machine-readable tag for UI code.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::DivisionByZero => "division_by_zero",
            Self::Overflow { .. } => "overflow",
        }
    }
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
