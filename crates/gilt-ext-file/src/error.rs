//! Error types for file-based inputs.

use std::path::PathBuf;

use gilt_portfolio::PortfolioError;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while loading input files.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value could not be interpreted.
    #[error("{source_name}, record {record}: {reason}")]
    Parse {
        /// File or stream the value came from.
        source_name: String,
        /// One-based record number, not counting any header.
        record: u64,
        /// What was wrong with the value.
        reason: String,
    },

    /// The file extension is not a supported format.
    #[error("Unsupported file format: {} (expected .csv or .json)", path.display())]
    UnsupportedFormat {
        /// Path of the file.
        path: PathBuf,
    },

    /// The loaded rows do not form a valid portfolio.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),
}

impl FileError {
    /// Create a parse error.
    #[must_use]
    pub fn parse(source_name: impl Into<String>, record: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            record,
            reason: reason.into(),
        }
    }

    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display() {
        let err = FileError::parse("bonds.csv", 3, "maturity_years = -2");
        assert_eq!(err.to_string(), "bonds.csv, record 3: maturity_years = -2");
    }

    #[test]
    fn test_io_display() {
        let err = FileError::io(
            "missing.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_portfolio_is_transparent() {
        let err = FileError::from(PortfolioError::EmptyPortfolio);
        assert_eq!(err.to_string(), "Portfolio has no holdings");
    }
}
