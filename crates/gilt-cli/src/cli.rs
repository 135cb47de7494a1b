//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AllocationArgs, DurationArgs, SummaryArgs, YieldsArgs};

/// Gilt - Fixed income portfolio duration analytics
#[derive(Parser)]
#[command(name = "gilt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./gilt.toml when present)
    #[arg(short, long, global = true, env = "GILT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the portfolio summary and total portfolio duration
    Summary(SummaryArgs),

    /// Analyze a single annual-pay bond (coupon, duration, cash flows)
    Duration(DurationArgs),

    /// Write the portfolio allocation pie chart (SVG)
    Allocation(AllocationArgs),

    /// Write the treasury-yield line chart (SVG)
    Yields(YieldsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
