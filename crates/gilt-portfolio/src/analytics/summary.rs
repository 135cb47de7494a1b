//! Portfolio analytics summary.
//!
//! Combines per-holding figures with portfolio totals. This is the primary
//! output of the crate and the source of the printed summary table.

use super::holding::HoldingAnalytics;
use super::risk::analyse_holdings;
use super::weighting::{weighted_sum, weights};
use crate::types::{AnalyticsConfig, Holding, WeightingMethod};
use crate::{Portfolio, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the portfolio summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSummary {
    /// Instrument name.
    pub id: String,

    /// Face value.
    pub face_value: Decimal,

    /// Annual coupon rate as a fraction.
    pub coupon_rate: Decimal,

    /// Number of annual periods to maturity.
    pub maturity_periods: u32,

    /// Yield to maturity as a fraction.
    pub yield_to_maturity: f64,

    /// Market value (market price in currency units).
    pub market_value: Decimal,

    /// Annual coupon payment.
    pub annual_coupon: Decimal,

    /// Macaulay duration in years.
    pub duration: f64,

    /// Modified duration.
    pub modified_duration: f64,

    /// Normalised weight under the configured method.
    pub weight: f64,
}

impl HoldingSummary {
    fn new(holding: &Holding, analytics: HoldingAnalytics, weight: f64) -> Self {
        Self {
            id: analytics.id,
            face_value: holding.instrument.face_value,
            coupon_rate: holding.instrument.coupon_rate,
            maturity_periods: holding.instrument.maturity_periods,
            yield_to_maturity: holding.instrument.yield_to_maturity,
            market_value: holding.market_value,
            annual_coupon: analytics.annual_coupon,
            duration: analytics.macaulay_duration.years(),
            modified_duration: analytics.modified_duration.years(),
            weight,
        }
    }
}

/// Portfolio summary: per-holding rows plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Portfolio name.
    pub name: String,

    /// Weighting method used for `weight` and the portfolio durations.
    pub weighting: WeightingMethod,

    /// Per-holding rows, in portfolio order.
    pub holdings: Vec<HoldingSummary>,

    /// Sum of market values.
    pub total_market_value: Decimal,

    /// Sum of annual coupon payments.
    pub total_annual_coupon: Decimal,

    /// Weighted Macaulay duration in years.
    pub duration: f64,

    /// Weighted modified duration.
    pub modified_duration: f64,
}

impl PortfolioSummary {
    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns the shortest and longest holding durations.
    #[must_use]
    pub fn duration_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.holdings.iter().map(|h| h.duration);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }
}

/// Calculates the full summary for a portfolio.
///
/// # Example
///
/// ```rust
/// use gilt_portfolio::prelude::*;
///
/// let portfolio = Portfolio::builder("One")
///     .add_holding(
///         Holding::builder()
///             .id("Bond C")
///             .instrument(Instrument::new(dec!(750_000), dec!(0.06), 0.059, 10))
///             .market_value(dec!(740_000))
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// let summary = calculate_portfolio_summary(&portfolio, &AnalyticsConfig::default()).unwrap();
/// assert_eq!(summary.holdings[0].weight, 1.0);
/// assert_eq!(summary.total_annual_coupon, dec!(45_000));
/// ```
///
/// # Errors
///
/// Fails on an empty portfolio, on the first holding whose instrument is
/// invalid, or when a total overflows `Decimal`.
pub fn calculate_portfolio_summary(
    portfolio: &Portfolio,
    config: &AnalyticsConfig,
) -> PortfolioResult<PortfolioSummary> {
    let w = weights(&portfolio.holdings, config.weighting)?;
    let analytics = analyse_holdings(&portfolio.holdings, config)?;

    let duration = weighted_sum(&w, analytics.iter().map(|a| a.macaulay_duration.years()));
    let modified_duration =
        weighted_sum(&w, analytics.iter().map(|a| a.modified_duration.years()));

    let holdings = portfolio
        .holdings
        .iter()
        .zip(analytics)
        .zip(w)
        .map(|((h, a), weight)| HoldingSummary::new(h, a, weight))
        .collect();

    Ok(PortfolioSummary {
        name: portfolio.name.clone(),
        weighting: config.weighting,
        holdings,
        total_market_value: portfolio.total_market_value()?,
        total_annual_coupon: portfolio.total_annual_coupon()?,
        duration,
        modified_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gilt_core::Instrument;
    use rust_decimal_macros::dec;

    fn demo() -> Portfolio {
        let rows = [
            ("Bond A", dec!(1_000_000), dec!(0.05), 0.052, 5, dec!(980_000)),
            ("Bond B", dec!(500_000), dec!(0.045), 0.047, 7, dec!(510_000)),
            ("Bond C", dec!(750_000), dec!(0.06), 0.059, 10, dec!(740_000)),
        ];
        Portfolio::builder("Demo")
            .add_holdings(rows.into_iter().map(|(id, face, cpn, ytm, m, mv)| {
                Holding::builder()
                    .id(id)
                    .instrument(Instrument::new(face, cpn, ytm, m))
                    .market_value(mv)
                    .build()
                    .unwrap()
            }))
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary_totals() {
        let summary = calculate_portfolio_summary(&demo(), &AnalyticsConfig::default()).unwrap();

        assert_eq!(summary.name, "Demo");
        assert_eq!(summary.holding_count(), 3);
        assert_eq!(summary.weighting, WeightingMethod::MarketValue);
        assert_eq!(summary.total_market_value, dec!(2_230_000));
        assert_eq!(summary.total_annual_coupon, dec!(117_500));
        assert_relative_eq!(summary.duration, 5.995_695_5, epsilon = 1e-6);
        assert_relative_eq!(summary.modified_duration, 5.689_431_5, epsilon = 1e-6);
    }

    #[test]
    fn test_summary_rows() {
        let summary = calculate_portfolio_summary(&demo(), &AnalyticsConfig::default()).unwrap();
        let b = &summary.holdings[1];

        assert_eq!(b.id, "Bond B");
        assert_eq!(b.market_value, dec!(510_000));
        assert_eq!(b.annual_coupon, dec!(22_500));
        assert_eq!(b.maturity_periods, 7);
        assert_relative_eq!(b.duration, 6.152_078_1, epsilon = 1e-6);
        assert_relative_eq!(b.weight, 0.228_699_55, epsilon = 1e-8);
    }

    #[test]
    fn test_duration_range_brackets_portfolio() {
        let summary = calculate_portfolio_summary(&demo(), &AnalyticsConfig::default()).unwrap();
        let (lo, hi) = summary.duration_range().unwrap();

        assert!(lo <= summary.duration && summary.duration <= hi);
        assert_relative_eq!(lo, 4.543_703_8, epsilon = 1e-6);
        assert_relative_eq!(hi, 7.810_826_2, epsilon = 1e-6);
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = calculate_portfolio_summary(&demo(), &AnalyticsConfig::default()).unwrap();
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"Bond C\""));
        assert!(json.contains("\"weighting\":\"market_value\""));
    }
}
