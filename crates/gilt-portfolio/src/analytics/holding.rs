//! Per-holding analytics.

use crate::types::Holding;
use crate::{PortfolioError, PortfolioResult};
use gilt_analytics::cashflows::CashFlowGenerator;
use gilt_analytics::pricing::present_value;
use gilt_analytics::risk::{instrument_duration, modified_from_macaulay, Duration};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::weighting::holding_f64;

/// Instrument-level figures for one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingAnalytics {
    /// Holding identifier.
    pub id: String,

    /// Annual coupon payment (face value × coupon rate).
    pub annual_coupon: Decimal,

    /// Macaulay duration at the quoted yield.
    pub macaulay_duration: Duration,

    /// Modified duration at the quoted yield.
    pub modified_duration: Duration,

    /// Present value of the cash flows at the quoted yield.
    pub model_price: f64,

    /// Annual coupon divided by market value.
    pub current_yield: f64,
}

/// Calculates coupon income, duration and model price for one holding.
///
/// # Errors
///
/// Returns [`PortfolioError::Analytics`] naming the holding when its
/// instrument terms are invalid, including payments that overflow `Decimal`.
/// No default duration is substituted.
pub fn holding_analytics(holding: &Holding) -> PortfolioResult<HoldingAnalytics> {
    let instrument = &holding.instrument;
    let wrap = |e| PortfolioError::analytics(&holding.id, e);

    let macaulay = instrument_duration(instrument).map_err(wrap)?;
    let modified = modified_from_macaulay(macaulay, instrument.yield_to_maturity).map_err(wrap)?;

    let schedule = CashFlowGenerator::annual(instrument).map_err(wrap)?;
    let model_price = present_value(&schedule, instrument.yield_to_maturity).map_err(wrap)?;

    let annual_coupon = holding.annual_coupon()?;
    let market_value = holding_f64(holding, "market_value", holding.market_value)?;
    let current_yield = if market_value > 0.0 {
        holding_f64(holding, "annual_coupon", annual_coupon)? / market_value
    } else {
        0.0
    };

    Ok(HoldingAnalytics {
        id: holding.id.clone(),
        annual_coupon,
        macaulay_duration: macaulay,
        modified_duration: modified,
        model_price,
        current_yield,
    })
}
