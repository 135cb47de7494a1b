//! Gilt CLI - portfolio duration analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Summary of the built-in three-bond portfolio
//! gilt summary
//!
//! # Summary of a portfolio file
//! gilt summary --portfolio data/sample_portfolio.csv
//!
//! # Duration of a single bond
//! gilt duration --face 1000000 --coupon 0.05 --yield 0.052 --maturity 5
//!
//! # Allocation pie chart and treasury-yield line chart
//! gilt allocation --out allocation.svg
//! gilt yields --input data/treasury_yields.csv --out yields.svg
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod charts;
mod cli;
mod commands;
mod config;
mod demo;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::GiltConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = GiltConfig::load(cli.config.as_deref())?;
    debug!(?config, "resolved configuration");

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        config,
    };

    match cli.command {
        Commands::Summary(args) => commands::summary::execute(args, &ctx)?,
        Commands::Duration(args) => commands::duration::execute(args, &ctx)?,
        Commands::Allocation(args) => commands::allocation::execute(args, &ctx)?,
        Commands::Yields(args) => commands::yields::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so table, JSON and CSV output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gilt=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
