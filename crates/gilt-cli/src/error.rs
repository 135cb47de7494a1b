//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Face value is not positive.
    #[error("Invalid face value: {0}. Must be positive.")]
    InvalidFace(String),

    /// Coupon rate outside [0, 1].
    #[error("Invalid coupon rate: {0}. Use a fraction between 0 and 1 (0.05 for 5%).")]
    InvalidCoupon(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Requested tenor is not a column of the yield history.
    #[error("Unknown tenor '{tenor}'. Available: {available}")]
    UnknownTenor {
        /// Requested tenor.
        tenor: String,
        /// Comma-separated tenors present in the file.
        available: String,
    },

    /// A chart could not be drawn from the data.
    #[error("Cannot draw chart: {0}")]
    Chart(String),

    /// Configuration error.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
