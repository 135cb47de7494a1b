//! Allocation command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use gilt_portfolio::allocation;

use crate::charts::{pie_chart, PieSlice};
use crate::cli::OutputFormat;
use crate::commands::{resolve_portfolio, write_chart, Context};
use crate::output::{
    format_amount, format_percent, print_csv_rows, print_header, print_json_value, print_output,
    print_success,
};

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    /// Portfolio file (CSV or JSON)
    #[arg(short, long)]
    pub portfolio: Option<PathBuf>,

    /// Chart output path [default: <chart_dir>/allocation.svg]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Chart title
    #[arg(long, default_value = "Portfolio Allocation by Market Value")]
    pub title: String,
}

#[derive(Debug, Serialize, Tabled)]
struct AllocationRow {
    #[tabled(rename = "Bond")]
    bond: String,
    #[tabled(rename = "Market Price")]
    market_value: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Execute the allocation command.
pub fn execute(args: AllocationArgs, ctx: &Context) -> Result<()> {
    let portfolio = resolve_portfolio(args.portfolio.as_deref(), &ctx.config)?;
    let slices = allocation(&portfolio)?;

    let pie: Vec<PieSlice> = slices
        .iter()
        .map(|s| PieSlice {
            label: s.label.clone(),
            fraction: s.weight,
        })
        .collect();
    let svg = pie_chart(&pie, &args.title)?;

    let path = ctx.config.chart_path(args.out, "allocation.svg");
    write_chart(&path, &svg)?;

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<AllocationRow> = slices
                .iter()
                .map(|s| AllocationRow {
                    bond: s.label.clone(),
                    market_value: format_amount(s.market_value),
                    weight: format_percent(s.weight, 1),
                })
                .collect();
            print_header(&format!("Allocation: {}", portfolio.name));
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json => print_json_value(&slices)?,
        OutputFormat::Csv => print_csv_rows(&slices)?,
        OutputFormat::Minimal => println!("{}", path.display()),
    }

    if !ctx.quiet && ctx.format == OutputFormat::Table {
        print_success(&format!("Allocation chart written to {}", path.display()));
    }

    Ok(())
}
