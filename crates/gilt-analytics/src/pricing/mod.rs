//! Present value of cash flow schedules.
//!
//! Discounting is annual: a flow received in period `t` is worth
//! `CF_t / (1 + y)^t` today.

use gilt_core::types::{decimal_to_f64, validate_yield, CashFlowSchedule};

use crate::error::AnalyticsResult;

/// Discount factor for an annually compounded yield at time `t` (years).
///
/// The caller is responsible for `1 + ytm > 0`.
#[inline]
#[must_use]
pub fn discount_factor(ytm: f64, t: f64) -> f64 {
    (1.0 + ytm).powf(-t)
}

/// Theoretical price of a schedule at the given yield to maturity.
///
/// # Errors
///
/// Returns `InvalidInput` if `1 + ytm` is not a positive base or a payment
/// has no `f64` value.
pub fn present_value(schedule: &CashFlowSchedule, ytm: f64) -> AnalyticsResult<f64> {
    validate_yield(ytm)?;

    let mut pv = 0.0;
    for cf in schedule {
        pv += decimal_to_f64("amount", cf.amount()?)? * discount_factor(ytm, cf.time());
    }
    Ok(pv)
}
