//! Error types for the Gilt workspace.
//!
//! The only failure the numerical core can raise is invalid input: a term
//! that makes discounting ill-defined or the cash-flow schedule empty.

use thiserror::Error;

/// A specialized Result type for Gilt core operations.
pub type GiltResult<T> = Result<T, GiltError>;

/// The main error type for Gilt core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GiltError {
    /// An instrument term is outside its valid range.
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending term.
        field: String,
        /// The rejected value, rendered for display.
        value: String,
        /// Why the value is rejected.
        reason: String,
    },

    /// Invalid cash flow schedule.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },
}

impl GiltError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }

    /// Returns true if this is an invalid input error.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
