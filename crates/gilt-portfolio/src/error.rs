//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use gilt_analytics::AnalyticsError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{id}': {reason}")]
    InvalidHolding {
        /// The holding ID.
        id: String,
        /// The reason the holding is invalid.
        reason: String,
    },

    /// Two holdings share an identifier.
    #[error("Duplicate holding id '{id}'")]
    DuplicateHolding {
        /// The repeated holding ID.
        id: String,
    },

    /// An instrument-level calculation failed for one holding.
    #[error("Analytics failed for holding '{id}': {source}")]
    Analytics {
        /// The holding ID.
        id: String,
        /// The underlying analytics error.
        #[source]
        source: AnalyticsError,
    },

    /// Division by zero in aggregation.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// A decimal aggregate left the representable range.
    #[error("Decimal overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Empty portfolio.
    #[error("Portfolio has no holdings")]
    EmptyPortfolio,
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an analytics error with the holding it belongs to.
    #[must_use]
    pub fn analytics(id: impl Into<String>, source: AnalyticsError) -> Self {
        Self::Analytics {
            id: id.into(),
            source,
        }
    }

    /// Create a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create a decimal overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Returns true if the root cause is invalid instrument input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Analytics { source, .. } if source.is_invalid_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::missing_field("name");
        assert!(err.to_string().contains("name"));

        let err = PortfolioError::invalid_holding("Bond A", "non-positive market value");
        assert!(err.to_string().contains("Bond A"));
        assert!(err.to_string().contains("non-positive market value"));
    }

    #[test]
    fn test_analytics_error_names_holding() {
        let err = PortfolioError::analytics(
            "Bond C",
            AnalyticsError::InvalidInput("maturity_periods = 0".to_string()),
        );
        assert!(err.to_string().contains("Bond C"));
        assert!(err.to_string().contains("maturity_periods"));
        assert!(err.is_invalid_input());
        assert!(!PortfolioError::EmptyPortfolio.is_invalid_input());
    }

    #[test]
    fn test_overflow_display() {
        let err = PortfolioError::overflow("total market value");
        assert_eq!(err.to_string(), "Decimal overflow in total market value");
    }

    #[test]
    fn test_error_clone() {
        let err = PortfolioError::EmptyPortfolio;
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
