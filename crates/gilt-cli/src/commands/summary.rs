//! Summary command implementation.
//!
//! Prints per-bond coupon, duration and weight, then the portfolio duration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gilt_portfolio::{calculate_portfolio_summary, AnalyticsConfig, HoldingSummary, WeightingMethod};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::{resolve_portfolio, Context};
use crate::output::{
    format_amount, format_percent, print_csv_rows, print_header, print_json_value, print_output,
};

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Portfolio file (.csv or .json). Defaults to the built-in sample.
    #[arg(short, long)]
    pub portfolio: Option<PathBuf>,

    /// Weighting for weights and portfolio duration: mv, par or equal
    #[arg(short, long)]
    pub weighting: Option<WeightingMethod>,
}

/// One printed table row.
#[derive(Debug, Serialize, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Bond")]
    bond: String,
    #[tabled(rename = "Market Price")]
    market_price: String,
    #[tabled(rename = "Annual Coupon Payment")]
    annual_coupon_payment: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl From<&HoldingSummary> for SummaryRow {
    fn from(h: &HoldingSummary) -> Self {
        Self {
            bond: h.id.clone(),
            market_price: format_amount(h.market_value),
            annual_coupon_payment: format_amount(h.annual_coupon),
            duration: format!("{:.4}", h.duration),
            weight: format_percent(h.weight, 2),
        }
    }
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, ctx: &Context) -> Result<()> {
    let portfolio = resolve_portfolio(args.portfolio.as_deref(), &ctx.config)?;

    let weighting = args.weighting.unwrap_or(ctx.config.weighting);
    let config = AnalyticsConfig::default().with_weighting(weighting);

    let summary = calculate_portfolio_summary(&portfolio, &config)?;
    debug!(
        holdings = summary.holding_count(),
        duration = summary.duration,
        "calculated portfolio summary"
    );

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("Bond Portfolio Summary: {}", summary.name));
            let rows: Vec<SummaryRow> = summary.holdings.iter().map(SummaryRow::from).collect();
            print_output(&rows, ctx.format)?;

            println!();
            if weighting != WeightingMethod::MarketValue {
                println!("Weighting: {weighting}");
            }
            println!(
                "Total Annual Coupon Income: {}",
                format_amount(summary.total_annual_coupon)
            );
            println!(
                "Portfolio Modified Duration: {:.2}",
                summary.modified_duration
            );
            println!("Total Portfolio Duration: {:.2} years", summary.duration);
        }
        OutputFormat::Json => print_json_value(&summary)?,
        OutputFormat::Csv => print_csv_rows(&summary.holdings)?,
        OutputFormat::Minimal => println!("{:.2}", summary.duration),
    }

    Ok(())
}
