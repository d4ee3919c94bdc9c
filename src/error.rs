// ❗ Error Taxonomy
// Request-level failures surfaced to callers

use thiserror::Error;

/// Errors raised while validating or computing a calculation request.
///
/// Dataset problems are not part of this enum: an unparseable energy value
/// just leaves the row without energy, and an empty match list is a valid
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl CalculatorError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CalculatorError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            CalculatorError::InvalidInput { field, .. } => field,
        }
    }
}

pub type CalcResult<T> = Result<T, CalculatorError>;
