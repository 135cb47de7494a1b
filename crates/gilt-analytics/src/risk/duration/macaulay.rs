//! Macaulay duration calculation.
//!
//! Macaulay duration is the weighted average time to receive cash flows,
//! where the weights are the present values of the cash flows.
//!
//! ## Formula
//!
//! ```text
//! D_mac = Σ(t × PV(CF_t)) / Σ PV(CF_t),    PV(CF_t) = CF_t / (1 + y)^t
//! ```
//!
//! where:
//! - t = payment period (in years, annual compounding)
//! - y = yield to maturity

use gilt_core::types::{validate_maturity, validate_yield, Instrument};

use super::Duration;
use crate::cashflows::CashFlowGenerator;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Calculate Macaulay duration of an annual-pay fixed coupon bond.
///
/// Periods `1..maturity_periods` pay `face_value × coupon_rate`; the final
/// period pays that coupon plus `face_value`.
///
/// # Arguments
///
/// * `face_value` - Redemption amount, positive
/// * `coupon_rate` - Annual coupon rate as a fraction, not negative
/// * `yield_to_maturity` - Annual yield as a fraction, greater than -1
/// * `maturity_periods` - Number of annual periods, at least 1
///
/// # Errors
///
/// Returns `InvalidInput` when any argument is outside its range. The
/// function never returns NaN or a silent zero.
///
/// # Example
///
/// ```rust
/// use gilt_analytics::risk::macaulay_duration;
///
/// let single = macaulay_duration(100.0, 0.08, 0.03, 1).unwrap();
/// assert_eq!(single.years(), 1.0);
/// ```
pub fn macaulay_duration(
    face_value: f64,
    coupon_rate: f64,
    yield_to_maturity: f64,
    maturity_periods: u32,
) -> AnalyticsResult<Duration> {
    if !face_value.is_finite() || face_value <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "face_value = {face_value} (must be positive)"
        )));
    }
    if !coupon_rate.is_finite() || coupon_rate < 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "coupon_rate = {coupon_rate} (must not be negative)"
        )));
    }
    validate_yield(yield_to_maturity)?;
    validate_maturity(maturity_periods)?;

    let coupon = face_value * coupon_rate;
    let (times, cash_flows): (Vec<f64>, Vec<f64>) = (1..=maturity_periods)
        .map(|period| {
            let amount = if period == maturity_periods {
                coupon + face_value
            } else {
                coupon
            };
            (f64::from(period), amount)
        })
        .unzip();

    macaulay_duration_from_cash_flows(&times, &cash_flows, yield_to_maturity)
}

/// Calculate Macaulay duration of an [`Instrument`] from its annual schedule.
///
/// # Errors
///
/// Returns `InvalidInput` if the instrument fails validation or a payment
/// has no `f64` value.
pub fn instrument_duration(instrument: &Instrument) -> AnalyticsResult<Duration> {
    let schedule = CashFlowGenerator::annual(instrument)?;
    let (times, cash_flows) = schedule.times_and_amounts()?;
    macaulay_duration_from_cash_flows(&times, &cash_flows, instrument.yield_to_maturity)
}

/// Calculate Macaulay duration from cash flows and an annual yield.
///
/// Present values are scaled in log space before summing: each nonzero flow
/// contributes `ln|CF_t| - t·ln(1 + y)`, the largest log is subtracted, and
/// only then is anything exponentiated. The ratio is unchanged by the common
/// factor, so extreme yields and long maturities neither underflow nor
/// overflow.
///
/// # Arguments
///
/// * `times` - Time to each cash flow in years
/// * `cash_flows` - Amount of each cash flow
/// * `ytm` - Yield to maturity (as decimal, e.g., 0.05 for 5%)
///
/// # Errors
///
/// `InvalidInput` on mismatched lengths, a non-finite time or amount, or an
/// invalid discount base. `InsufficientData` without cash flows.
/// `DivisionByZero` when the flows have no positive present value, which a
/// bond schedule (final flow includes principal) never produces.
pub fn macaulay_duration_from_cash_flows(
    times: &[f64],
    cash_flows: &[f64],
    ytm: f64,
) -> AnalyticsResult<Duration> {
    if times.len() != cash_flows.len() {
        return Err(AnalyticsError::InvalidInput(
            "times and cash_flows must have same length".to_string(),
        ));
    }

    if times.is_empty() {
        return Err(AnalyticsError::InsufficientData(
            "no cash flows provided".to_string(),
        ));
    }

    validate_yield(ytm)?;

    if let Some((t, cf)) = times
        .iter()
        .zip(cash_flows)
        .find(|(t, cf)| !t.is_finite() || !cf.is_finite())
    {
        return Err(AnalyticsError::InvalidInput(format!(
            "cash flow {cf} at t = {t} is not finite"
        )));
    }

    let ln_base = ytm.ln_1p();

    // (t, sign, ln |PV_t|) for every nonzero flow
    let logs: Vec<(f64, f64, f64)> = times
        .iter()
        .zip(cash_flows)
        .filter(|(_, cf)| **cf != 0.0)
        .map(|(t, cf)| (*t, cf.signum(), cf.abs().ln() - t * ln_base))
        .collect();

    let max_log = logs
        .iter()
        .map(|(_, _, l)| *l)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut weighted_sum = 0.0;
    let mut price = 0.0;

    for (t, sign, l) in &logs {
        let pv = sign * (l - max_log).exp();

        weighted_sum += t * pv;
        price += pv;
    }

    if price <= 0.0 {
        return Err(AnalyticsError::DivisionByZero {
            context: format!("macaulay duration (scaled present value sum {price})"),
        });
    }

    Ok(Duration::from(weighted_sum / price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reference_bond() {
        // 1,000,000 face, 5% coupon, 5.2% yield, 5 years
        let dur = macaulay_duration(1_000_000.0, 0.05, 0.052, 5).unwrap();

        assert_relative_eq!(dur.years(), 4.5437, epsilon = 1e-4);
        assert!((dur.years() - 4.53).abs() < 0.02);
    }

    #[test]
    fn test_par_bond() {
        // 2-year 5% annual bond priced at par
        let dur = macaulay_duration(100.0, 0.05, 0.05, 2).unwrap();

        // (1 × 5/1.05 + 2 × 105/1.05²) / 100 = 1.95238...
        assert_relative_eq!(dur.years(), 1.952_380_952, epsilon = 1e-9);
    }

    #[test]
    fn test_single_period_is_exactly_one() {
        for (coupon, ytm) in [(0.0, 0.0), (0.05, 0.052), (0.12, -0.5), (0.0, 3.0)] {
            let dur = macaulay_duration(1_000.0, coupon, ytm, 1).unwrap();
            assert_eq!(dur.years(), 1.0);
        }
    }

    #[test]
    fn test_zero_coupon_equals_maturity() {
        for maturity in [1_u32, 2, 5, 10, 30] {
            let dur = macaulay_duration(100.0, 0.0, 0.05, maturity).unwrap();
            assert_relative_eq!(dur.years(), f64::from(maturity), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_maturity_is_invalid_input() {
        let err = macaulay_duration(1_000_000.0, 0.05, 0.052, 0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("maturity_periods"));
    }

    #[test]
    fn test_non_positive_discount_base_is_invalid_input() {
        for ytm in [-1.0, -1.01, -5.0, f64::NAN] {
            let err = macaulay_duration(100.0, 0.05, ytm, 5).unwrap_err();
            assert!(err.is_invalid_input(), "ytm {ytm} gave {err}");
        }
    }

    #[test]
    fn test_bad_face_and_coupon() {
        assert!(macaulay_duration(0.0, 0.05, 0.05, 5)
            .unwrap_err()
            .is_invalid_input());
        assert!(macaulay_duration(100.0, -0.05, 0.05, 5)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_instrument_path_matches_scalar_path() {
        let bond = Instrument::new(dec!(500_000), dec!(0.045), 0.047, 7);
        let from_instrument = instrument_duration(&bond).unwrap();
        let from_scalars = macaulay_duration(500_000.0, 0.045, 0.047, 7).unwrap();

        assert_relative_eq!(
            from_instrument.years(),
            from_scalars.years(),
            epsilon = 1e-12
        );
        assert_relative_eq!(from_instrument.years(), 6.1521, epsilon = 1e-4);
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = macaulay_duration_from_cash_flows(&[1.0, 2.0], &[5.0], 0.05);
        assert!(result.unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_empty() {
        let result = macaulay_duration_from_cash_flows(&[], &[], 0.05);
        assert!(matches!(
            result,
            Err(AnalyticsError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_zero_coupon_large_yield_is_maturity() {
        // (1 + y)^-1100 underflows f64 unless scaled
        let dur = macaulay_duration(1_000_000.0, 0.0, 1.0, 1100).unwrap();
        assert_eq!(dur.years(), 1100.0);

        let dur = macaulay_duration(100.0, 0.0, 50.0, 2000).unwrap();
        assert_eq!(dur.years(), 2000.0);
    }

    #[test]
    fn test_yield_near_minus_one() {
        // (1 + y)^-200 overflows f64 unless scaled; principal dominates
        let dur = macaulay_duration(100.0, 0.05, -0.999, 200).unwrap();
        assert!(dur.years().is_finite());
        assert!(dur.years() <= 200.0);
        assert_relative_eq!(dur.years(), 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_large_yield_with_coupon_stays_in_range() {
        // High yield pulls duration towards the first period
        let dur = macaulay_duration(100.0, 0.05, 1_000.0, 1500).unwrap();
        assert!(dur.years() >= 1.0 && dur.years() < 1.01);
    }

    #[test]
    fn test_scaling_matches_direct_sum() {
        let times = [1.0, 2.0, 3.0];
        let flows = [6.0, 6.0, 106.0];
        let direct: f64 = times
            .iter()
            .zip(flows)
            .map(|(t, cf)| t * cf * 1.04_f64.powf(-t))
            .sum::<f64>()
            / times
                .iter()
                .zip(flows)
                .map(|(t, cf)| cf * 1.04_f64.powf(-t))
                .sum::<f64>();

        let dur = macaulay_duration_from_cash_flows(&times, &flows, 0.04).unwrap();
        assert_relative_eq!(dur.years(), direct, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_flow_is_invalid_input() {
        let result = macaulay_duration_from_cash_flows(&[1.0, 2.0], &[5.0, f64::INFINITY], 0.05);
        assert!(result.unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_zero_present_value() {
        let result = macaulay_duration_from_cash_flows(&[1.0, 2.0], &[0.0, 0.0], 0.05);
        assert!(matches!(result, Err(AnalyticsError::DivisionByZero { .. })));
    }
}
