//! Error types for duration analytics.

use thiserror::Error;

/// Errors that can occur during analytics calculations.
///
/// None of these are recovered locally: a failing instrument stops its own
/// calculation and the error is handed back to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Invalid input parameter (maturity below one period, discount base not positive, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Duration calculation failed
    #[error("duration calculation failed: {0}")]
    DurationFailed(String),

    /// Insufficient data for calculation
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Division by zero
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Where the zero denominator appeared.
        context: String,
    },
}

impl AnalyticsError {
    /// Returns true for the invalid-input class of errors.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<gilt_core::GiltError> for AnalyticsError {
    fn from(err: gilt_core::GiltError) -> Self {
        match err {
            gilt_core::GiltError::InvalidInput { .. } => {
                AnalyticsError::InvalidInput(err.to_string())
            }
            gilt_core::GiltError::InvalidCashFlow { .. } => {
                AnalyticsError::DurationFailed(err.to_string())
            }
        }
    }
}
