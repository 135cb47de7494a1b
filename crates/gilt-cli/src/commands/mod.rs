//! CLI command implementations.

pub mod allocation;
pub mod duration;
pub mod summary;
pub mod yields;

// Re-export submodules for convenience
pub use allocation::AllocationArgs;
pub use duration::DurationArgs;
pub use summary::SummaryArgs;
pub use yields::YieldsArgs;

use std::path::Path;

use anyhow::{Context as _, Result};
use gilt_portfolio::Portfolio;
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::GiltConfig;
use crate::demo::demo_portfolio;

/// Settings shared by every command.
#[derive(Debug)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub config: GiltConfig,
}

/// Loads the portfolio named on the command line, else the configured one,
/// else the built-in sample.
pub fn resolve_portfolio(explicit: Option<&Path>, config: &GiltConfig) -> Result<Portfolio> {
    match explicit.or(config.portfolio.as_deref()) {
        Some(path) => gilt_ext_file::load_portfolio(path, &config.portfolio_name)
            .with_context(|| format!("loading portfolio from {}", path.display())),
        None => {
            info!("no portfolio file given, using the built-in sample");
            Ok(demo_portfolio()?)
        }
    }
}

/// Writes a chart, creating the parent directory when needed.
pub fn write_chart(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = svg.len(), "wrote chart");
    Ok(())
}
