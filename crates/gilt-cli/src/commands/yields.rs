//! Yields command implementation.
//!
//! Draws the treasury-yield history as one line per tenor.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use gilt_ext_file::{CsvYieldHistorySource, YieldHistory, YieldHistorySource};

use crate::charts::{line_chart, LineSeries};
use crate::cli::OutputFormat;
use crate::commands::{write_chart, Context};
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_output, print_success};

/// Arguments for the yields command.
#[derive(Args, Debug)]
pub struct YieldsArgs {
    /// Yield history CSV (date column followed by one column per tenor)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Chart output path [default: <chart_dir>/treasury_yields.svg]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Tenors to plot, comma separated [default: every tenor in the file]
    #[arg(short, long, value_delimiter = ',')]
    pub tenors: Vec<String>,

    /// Chart title
    #[arg(long, default_value = "US Treasury Yield Curve Movements")]
    pub title: String,
}

#[derive(Debug, Serialize, Tabled)]
struct TenorRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Latest Date")]
    latest_date: String,
    #[tabled(rename = "Latest Yield")]
    latest_yield: String,
    #[tabled(rename = "Observations")]
    observations: usize,
}

/// Picks the tenors to draw, keeping the file's spelling of each label.
fn select_tenors(history: &YieldHistory, requested: &[String]) -> CliResult<Vec<String>> {
    if requested.is_empty() {
        return Ok(history.tenors().to_vec());
    }

    requested
        .iter()
        .map(|wanted| {
            history
                .tenors()
                .iter()
                .find(|t| t.eq_ignore_ascii_case(wanted))
                .cloned()
                .ok_or_else(|| CliError::UnknownTenor {
                    tenor: wanted.clone(),
                    available: history.tenors().join(", "),
                })
        })
        .collect()
}

/// Execute the yields command.
pub fn execute(args: YieldsArgs, ctx: &Context) -> Result<()> {
    let input = args
        .input
        .or_else(|| ctx.config.yield_history.clone())
        .ok_or_else(|| CliError::MissingArgument("--input".into()))?;

    let source = CsvYieldHistorySource::new(&input);
    let history = source
        .load()
        .with_context(|| format!("loading yield history from {}", input.display()))?;
    debug!(source = %source.source_name(), rows = history.len(), "loaded yield history");

    let tenors = select_tenors(&history, &args.tenors)?;
    let series: Vec<LineSeries> = tenors
        .iter()
        .map(|tenor| LineSeries {
            label: tenor.clone(),
            points: history.series(tenor),
        })
        .collect();

    let svg = line_chart(&series, &args.title, "Date", "Yield (%)")?;
    let path = ctx.config.chart_path(args.out, "treasury_yields.svg");
    write_chart(&path, &svg)?;

    let rows: Vec<TenorRow> = series
        .iter()
        .map(|s| {
            let (latest_date, latest_yield) = match s.points.last() {
                Some((date, value)) => (date.to_string(), format!("{value:.2}%")),
                None => ("-".to_string(), "-".to_string()),
            };
            TenorRow {
                tenor: s.label.clone(),
                latest_date,
                latest_yield,
                observations: s.points.len(),
            }
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if let Some((first, last)) = history.date_range() {
                print_header(&format!("Treasury Yields: {first} to {last}"));
            }
            print_output(&rows, ctx.format)?;
            if !ctx.quiet {
                print_success(&format!("Yield chart written to {}", path.display()));
            }
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, ctx.format)?,
        OutputFormat::Minimal => println!("{}", path.display()),
    }

    Ok(())
}
