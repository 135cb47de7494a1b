//! Property-based tests for Macaulay duration invariants.
//!
//! These tests verify mathematical properties that should always hold:
//! - Duration lies between the first and last payment times, including
//!   yields near -1 and far above 100% over long maturities
//! - Single-period instruments have duration exactly one
//! - Zero-coupon instruments have duration equal to maturity
//! - Invalid maturities and discount bases fail instead of returning NaN

use approx::assert_relative_eq;
use gilt_analytics::prelude::*;
use gilt_core::Instrument;
use proptest::prelude::*;
use rust_decimal::Decimal;

const TOLERANCE: f64 = 1e-9;

proptest! {
    #[test]
    fn duration_within_payment_window(
        face in 1.0f64..10_000_000.0,
        coupon in 0.0f64..1.0,
        ytm in -0.999f64..50.0,
        maturity in 1u32..=2000,
    ) {
        let dur = macaulay_duration(face, coupon, ytm, maturity).unwrap();
        let slack = TOLERANCE * f64::from(maturity);

        prop_assert!(dur.years().is_finite());
        prop_assert!(dur.years() >= 1.0 - slack);
        prop_assert!(dur.years() <= f64::from(maturity) + slack);
    }

    #[test]
    fn extreme_yields_stay_defined(
        coupon in 0.0f64..0.25,
        ytm in prop_oneof![-0.9999f64..-0.99, 10.0f64..1_000.0],
        maturity in 500u32..=2000,
    ) {
        let dur = macaulay_duration(1_000_000.0, coupon, ytm, maturity).unwrap();
        let slack = TOLERANCE * f64::from(maturity);

        prop_assert!(dur.years().is_finite());
        prop_assert!(dur.years() >= 1.0 - slack);
        prop_assert!(dur.years() <= f64::from(maturity) + slack);
    }

    #[test]
    fn single_period_is_one(
        face in 1.0f64..10_000_000.0,
        coupon in 0.0f64..1.0,
        ytm in -0.999f64..50.0,
    ) {
        let dur = macaulay_duration(face, coupon, ytm, 1).unwrap();
        prop_assert_eq!(dur.years(), 1.0);
    }

    #[test]
    fn zero_coupon_is_maturity(
        face in 1.0f64..10_000_000.0,
        ytm in -0.999f64..50.0,
        maturity in 1u32..=2000,
    ) {
        let dur = macaulay_duration(face, 0.0, ytm, maturity).unwrap();
        prop_assert_eq!(dur.years(), f64::from(maturity));
    }

    #[test]
    fn discount_base_at_or_below_zero_fails(
        ytm in -10.0f64..=-1.0,
        maturity in 1u32..=30,
    ) {
        let err = macaulay_duration(100.0, 0.05, ytm, maturity).unwrap_err();
        prop_assert!(err.is_invalid_input());
    }

    #[test]
    fn higher_yield_shortens_duration(
        coupon in 0.001f64..0.2,
        ytm in 0.0f64..0.5,
        maturity in 2u32..=40,
    ) {
        let low = macaulay_duration(100.0, coupon, ytm, maturity).unwrap();
        let high = macaulay_duration(100.0, coupon, ytm + 0.01, maturity).unwrap();
        prop_assert!(high.years() < low.years());
    }
}

#[test]
fn zero_maturity_fails_for_every_entry_point() {
    let err = macaulay_duration(1_000_000.0, 0.05, 0.052, 0).unwrap_err();
    assert!(err.is_invalid_input());

    let bond = Instrument::new(Decimal::new(1_000_000, 0), Decimal::new(5, 2), 0.052, 0);
    assert!(instrument_duration(&bond).unwrap_err().is_invalid_input());
    assert!(modified_duration(&bond).unwrap_err().is_invalid_input());
    assert!(CashFlowGenerator::annual(&bond)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn sample_portfolio_durations() {
    // Bond A / B / C of the demo portfolio
    let cases = [
        (1_000_000.0, 0.05, 0.052, 5, 4.5437),
        (500_000.0, 0.045, 0.047, 7, 6.1521),
        (750_000.0, 0.06, 0.059, 10, 7.8108),
    ];

    for (face, coupon, ytm, maturity, expected) in cases {
        let dur = macaulay_duration(face, coupon, ytm, maturity).unwrap();
        assert_relative_eq!(dur.years(), expected, epsilon = 1e-4);
    }
}
