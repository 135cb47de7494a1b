//! Weighted portfolio duration.
//!
//! ## Formula
//!
//! ```text
//! Duration_portfolio = Σ(w_i × Duration_i),    Σ w_i = 1
//! ```
//!
//! Weights follow the configured weighting method (market value by default).
//! A portfolio duration always lies between the shortest and the longest
//! holding duration.

use super::holding::{holding_analytics, HoldingAnalytics};
use super::parallel::maybe_parallel_map;
use super::weighting::{weighted_sum, weights};
use crate::types::{AnalyticsConfig, Holding};
use crate::PortfolioResult;
use gilt_analytics::risk::Duration;

/// Calculates weighted average Macaulay duration.
///
/// # Errors
///
/// Fails on an empty slice, a non-positive weight total, or the first
/// holding whose instrument is invalid.
pub fn weighted_duration(holdings: &[Holding], config: &AnalyticsConfig) -> PortfolioResult<Duration> {
    weighted_metric(holdings, config, |a| a.macaulay_duration.years())
}

/// Calculates weighted average modified duration.
///
/// # Errors
///
/// Same conditions as [`weighted_duration`].
pub fn weighted_modified_duration(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<Duration> {
    weighted_metric(holdings, config, |a| a.modified_duration.years())
}

/// Runs per-holding analytics, in parallel above the configured threshold.
pub(crate) fn analyse_holdings(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<HoldingAnalytics>> {
    maybe_parallel_map(holdings, config, holding_analytics)
        .into_iter()
        .collect()
}

fn weighted_metric<F>(
    holdings: &[Holding],
    config: &AnalyticsConfig,
    get_value: F,
) -> PortfolioResult<Duration>
where
    F: Fn(&HoldingAnalytics) -> f64,
{
    let w = weights(holdings, config.weighting)?;
    let analytics = analyse_holdings(holdings, config)?;
    Ok(Duration::from(weighted_sum(
        &w,
        analytics.iter().map(get_value),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeightingMethod;
    use crate::PortfolioError;
    use approx::assert_relative_eq;
    use gilt_core::Instrument;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn create_holding(
        id: &str,
        face: Decimal,
        coupon: Decimal,
        ytm: f64,
        maturity: u32,
        mv: Decimal,
    ) -> Holding {
        Holding::builder()
            .id(id)
            .instrument(Instrument::new(face, coupon, ytm, maturity))
            .market_value(mv)
            .build()
            .unwrap()
    }

    fn sample() -> Vec<Holding> {
        vec![
            create_holding("Bond A", dec!(1_000_000), dec!(0.05), 0.052, 5, dec!(980_000)),
            create_holding("Bond B", dec!(500_000), dec!(0.045), 0.047, 7, dec!(510_000)),
            create_holding("Bond C", dec!(750_000), dec!(0.06), 0.059, 10, dec!(740_000)),
        ]
    }

    #[test]
    fn test_weighted_duration() {
        let d = weighted_duration(&sample(), &AnalyticsConfig::default()).unwrap();
        assert_relative_eq!(d.years(), 5.995_695_5, epsilon = 1e-6);
    }

    #[test]
    fn test_weighted_modified_duration() {
        let d = weighted_modified_duration(&sample(), &AnalyticsConfig::default()).unwrap();
        assert_relative_eq!(d.years(), 5.689_431_5, epsilon = 1e-6);
    }

    #[test]
    fn test_par_value_weighting() {
        let config = AnalyticsConfig::default().with_weighting(WeightingMethod::ParValue);
        let d = weighted_duration(&sample(), &config).unwrap();
        assert_relative_eq!(d.years(), 5.990_161_1, epsilon = 1e-6);
    }

    #[test]
    fn test_equal_weighting() {
        let config = AnalyticsConfig::default().with_weighting(WeightingMethod::EqualWeight);
        let d = weighted_duration(&sample(), &config).unwrap();
        assert_relative_eq!(d.years(), 6.168_869_4, epsilon = 1e-6);
    }

    #[test]
    fn test_single_holding_equals_its_duration() {
        let holdings = vec![create_holding(
            "Zero",
            dec!(100),
            dec!(0),
            0.04,
            8,
            dec!(73),
        )];
        let d = weighted_duration(&holdings, &AnalyticsConfig::default()).unwrap();
        assert_relative_eq!(d.years(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_holding_propagates() {
        let mut holdings = sample();
        holdings.push(create_holding("Bad", dec!(100), dec!(0.05), 0.05, 0, dec!(100)));

        match weighted_duration(&holdings, &AnalyticsConfig::default()) {
            Err(PortfolioError::Analytics { id, .. }) => assert_eq!(id, "Bad"),
            other => panic!("expected analytics error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_portfolio() {
        assert!(matches!(
            weighted_duration(&[], &AnalyticsConfig::default()),
            Err(PortfolioError::EmptyPortfolio)
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let holdings: Vec<Holding> = (0..250)
            .map(|i| {
                create_holding(
                    &format!("B{i}"),
                    dec!(1_000),
                    Decimal::new(i64::from(i % 9), 2),
                    0.03 + f64::from(i % 5) * 0.005,
                    1 + i % 30,
                    Decimal::from(900 + i),
                )
            })
            .collect();

        let seq = weighted_duration(&holdings, &AnalyticsConfig::sequential()).unwrap();
        let par = weighted_duration(&holdings, &AnalyticsConfig::new().with_threshold(10)).unwrap();
        assert_relative_eq!(seq.years(), par.years(), epsilon = 1e-12);
    }
}
