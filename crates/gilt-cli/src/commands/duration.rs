//! Duration command implementation.
//!
//! Analyzes a single annual-pay fixed coupon bond.

use anyhow::Result;
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use gilt_analytics::prelude::*;
use gilt_core::types::decimal_to_f64;
use gilt_core::{CashFlowSchedule, Instrument};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_amount, format_percent, print_header, print_json_value, print_output, KeyValue,
};

/// Arguments for the duration command.
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Face (redemption) value
    #[arg(long, default_value = "100")]
    pub face: Decimal,

    /// Annual coupon rate as a fraction (0.05 for 5%)
    #[arg(long)]
    pub coupon: Decimal,

    /// Yield to maturity as a fraction (0.052 for 5.2%)
    #[arg(short = 'y', long = "yield", allow_hyphen_values = true)]
    pub yield_to_maturity: f64,

    /// Years to maturity (annual periods)
    #[arg(short, long)]
    pub maturity: u32,

    /// Market price in currency units, for current yield
    #[arg(long)]
    pub market_price: Option<Decimal>,

    /// Show cashflows
    #[arg(long)]
    pub cashflows: bool,
}

/// Machine-readable result.
#[derive(Debug, Serialize)]
struct DurationReport {
    face_value: Decimal,
    coupon_rate: Decimal,
    yield_to_maturity: f64,
    maturity_periods: u32,
    annual_coupon: Decimal,
    model_price: f64,
    macaulay_duration: f64,
    modified_duration: f64,
    price_change_up_100bp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cash_flows: Option<Vec<CashflowRow>>,
}

#[derive(Debug, Serialize, Tabled)]
struct CashflowRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Cashflow")]
    amount: String,
    #[tabled(rename = "Type")]
    flow_type: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
}

/// Rejects inputs the analytics would accept but are almost certainly typos.
fn validate_terms(args: &DurationArgs) -> CliResult<()> {
    if args.face <= Decimal::ZERO {
        return Err(CliError::InvalidFace(args.face.to_string()));
    }
    if args.coupon < Decimal::ZERO || args.coupon > Decimal::ONE {
        return Err(CliError::InvalidCoupon(args.coupon.to_string()));
    }
    Ok(())
}

fn cashflow_rows(schedule: &CashFlowSchedule, ytm: f64) -> Result<Vec<CashflowRow>> {
    schedule
        .iter()
        .map(|cf| -> Result<CashflowRow> {
            let amount = cf.amount()?;
            let df = discount_factor(ytm, cf.time());
            let pv = decimal_to_f64("amount", amount)? * df;
            Ok(CashflowRow {
                period: cf.period(),
                amount: format_amount(amount),
                flow_type: cf.flow_type().to_string(),
                discount_factor: format!("{df:.6}"),
                present_value: format!("{pv:.2}"),
            })
        })
        .collect()
}

/// Execute the duration command.
pub fn execute(args: DurationArgs, ctx: &Context) -> Result<()> {
    validate_terms(&args)?;

    let bond = Instrument::new(args.face, args.coupon, args.yield_to_maturity, args.maturity);

    let mac_duration = instrument_duration(&bond)?;
    let mod_duration = modified_from_macaulay(mac_duration, bond.yield_to_maturity)?;
    let schedule = CashFlowGenerator::annual(&bond)?;
    let model_price = present_value(&schedule, bond.yield_to_maturity)?;
    let shock = price_change_from_duration(mod_duration, model_price, 0.01);
    let annual_coupon = bond.annual_coupon()?;

    // No current yield when the price is non-positive or the ratio overflows
    let current_yield = args
        .market_price
        .filter(|p| *p > Decimal::ZERO)
        .and_then(|p| annual_coupon.checked_div(p))
        .and_then(|cy| cy.to_f64());

    let cash_flows = args
        .cashflows
        .then(|| cashflow_rows(&schedule, bond.yield_to_maturity))
        .transpose()?;

    match ctx.format {
        OutputFormat::Table => {
            let mut results = vec![
                KeyValue::new("Face Value", format_amount(bond.face_value)),
                KeyValue::new(
                    "Coupon Rate",
                    format!("{}%", (bond.coupon_rate * Decimal::ONE_HUNDRED).normalize()),
                ),
                KeyValue::new(
                    "Yield to Maturity",
                    format_percent(bond.yield_to_maturity, 4),
                ),
                KeyValue::new("Maturity", format!("{} years", bond.maturity_periods)),
                KeyValue::new("Annual Coupon Payment", format_amount(annual_coupon)),
                KeyValue::new("Model Price", format!("{model_price:.2}")),
            ];
            if let Some(cy) = current_yield {
                results.push(KeyValue::new("Current Yield", format_percent(cy, 4)));
            }
            results.push(KeyValue::new(
                "Macaulay Duration",
                format!("{:.4}", mac_duration.years()),
            ));
            results.push(KeyValue::new(
                "Modified Duration",
                format!("{:.4}", mod_duration.years()),
            ));
            results.push(KeyValue::new("Price Change (+100bp)", format!("{shock:.2}")));

            print_header("Bond Analytics");
            print_output(&results, ctx.format)?;

            if let Some(rows) = &cash_flows {
                print_header("Cash Flows");
                print_output(rows, ctx.format)?;
            }
        }
        OutputFormat::Json => {
            let report = DurationReport {
                face_value: bond.face_value,
                coupon_rate: bond.coupon_rate,
                yield_to_maturity: bond.yield_to_maturity,
                maturity_periods: bond.maturity_periods,
                annual_coupon,
                model_price,
                macaulay_duration: mac_duration.years(),
                modified_duration: mod_duration.years(),
                price_change_up_100bp: shock,
                current_yield,
                cash_flows,
            };
            print_json_value(&report)?;
        }
        OutputFormat::Csv => match &cash_flows {
            Some(rows) => print_output(rows, ctx.format)?,
            None => {
                let results = vec![
                    KeyValue::new("annual_coupon", annual_coupon.to_string()),
                    KeyValue::new("model_price", format!("{model_price:.6}")),
                    KeyValue::new("macaulay_duration", format!("{:.6}", mac_duration.years())),
                    KeyValue::new("modified_duration", format!("{:.6}", mod_duration.years())),
                    KeyValue::new("price_change_up_100bp", format!("{shock:.6}")),
                ];
                print_output(&results, ctx.format)?;
            }
        },
        OutputFormat::Minimal => println!("{:.4}", mac_duration.years()),
    }

    Ok(())
}
