//! Property-based tests for portfolio invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Weights sum to 1 for any positive market values
//! - Portfolio duration lies between the shortest and longest holding duration
//! - Allocation weights match market-value weights

use gilt_portfolio::prelude::*;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

prop_compose! {
    fn arb_holding(index: usize)(
        face in 1_000i64..10_000_000,
        coupon_bp in 0i64..1_500,
        ytm in -0.5f64..0.5,
        maturity in 1u32..=40,
        mv in 1_000i64..10_000_000,
    ) -> Holding {
        Holding::builder()
            .id(format!("H{index}"))
            .instrument(Instrument::new(
                Decimal::from(face),
                Decimal::new(coupon_bp, 4),
                ytm,
                maturity,
            ))
            .market_value(Decimal::from(mv))
            .build()
            .unwrap()
    }
}

fn arb_portfolio() -> impl Strategy<Value = Portfolio> {
    (1usize..=25)
        .prop_flat_map(|n| (0..n).map(arb_holding).collect::<Vec<_>>())
        .prop_map(|holdings| {
            PortfolioBuilder::new()
                .name("Generated")
                .add_holdings(holdings)
                .build()
                .unwrap()
        })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn weights_sum_to_one(portfolio in arb_portfolio()) {
        for method in [
            WeightingMethod::MarketValue,
            WeightingMethod::ParValue,
            WeightingMethod::EqualWeight,
        ] {
            let w = weights(&portfolio.holdings, method).unwrap();
            prop_assert_eq!(w.len(), portfolio.holding_count());
            prop_assert!((w.iter().sum::<f64>() - 1.0).abs() < TOLERANCE);
            prop_assert!(w.iter().all(|x| *x > 0.0));
        }
    }

    #[test]
    fn portfolio_duration_within_holding_range(portfolio in arb_portfolio()) {
        let summary =
            calculate_portfolio_summary(&portfolio, &AnalyticsConfig::default()).unwrap();
        let (lo, hi) = summary.duration_range().unwrap();

        prop_assert!(summary.duration >= lo - TOLERANCE);
        prop_assert!(summary.duration <= hi + TOLERANCE);
    }

    #[test]
    fn summary_agrees_with_weighted_duration(portfolio in arb_portfolio()) {
        let config = AnalyticsConfig::default();
        let summary = calculate_portfolio_summary(&portfolio, &config).unwrap();
        let direct = weighted_duration(&portfolio.holdings, &config).unwrap();

        prop_assert!((summary.duration - direct.years()).abs() < TOLERANCE);
    }

    #[test]
    fn allocation_matches_market_value_weights(portfolio in arb_portfolio()) {
        let slices = allocation(&portfolio).unwrap();
        let w = weights(&portfolio.holdings, WeightingMethod::MarketValue).unwrap();

        for (slice, weight) in slices.iter().zip(w) {
            prop_assert!((slice.weight - weight).abs() < TOLERANCE);
        }
    }
}
