//! CLI configuration.
//!
//! Optional TOML file; every key has a default and command-line flags take
//! precedence over file values.
//!
//! ```toml
//! portfolio = "data/sample_portfolio.csv"
//! portfolio_name = "Core Bonds"
//! yield_history = "data/treasury_yields.csv"
//! chart_dir = "charts"
//! weighting = "market_value"
//! ```

use std::path::{Path, PathBuf};

use gilt_portfolio::WeightingMethod;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CliError, CliResult};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gilt.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GiltConfig {
    /// Default portfolio file; the built-in demo portfolio is used when unset.
    pub portfolio: Option<PathBuf>,

    /// Name given to portfolios loaded from files without one.
    pub portfolio_name: String,

    /// Default treasury-yield history file.
    pub yield_history: Option<PathBuf>,

    /// Directory charts are written to when no output path is given.
    pub chart_dir: PathBuf,

    /// Default weighting method.
    pub weighting: WeightingMethod,
}

impl Default for GiltConfig {
    fn default() -> Self {
        Self {
            portfolio: None,
            portfolio_name: "Portfolio".to_string(),
            yield_history: None,
            chart_dir: PathBuf::from("."),
            weighting: WeightingMethod::MarketValue,
        }
    }
}

impl GiltConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Resolves the configuration for this run.
    ///
    /// An explicit path must exist. Without one, `gilt.toml` in the working
    /// directory is used when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            info!(path = DEFAULT_CONFIG_FILE, "loading configuration");
            Self::from_file(fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// Output path for a chart: the explicit path, or `file_name` inside
    /// `chart_dir`.
    pub fn chart_path(&self, explicit: Option<PathBuf>, file_name: &str) -> PathBuf {
        explicit.unwrap_or_else(|| self.chart_dir.join(file_name))
    }
}
