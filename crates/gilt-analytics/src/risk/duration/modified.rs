//! Modified duration calculation.
//!
//! Modified duration measures the percentage price change per unit change in yield.
//! With annual compounding it is derived from Macaulay duration as:
//!
//! ```text
//! D_mod = D_mac / (1 + y)
//! ```

use gilt_core::types::{validate_yield, Instrument};

use super::{instrument_duration, Duration};
use crate::error::AnalyticsResult;

/// Calculate modified duration of an instrument at its quoted yield.
///
/// # Errors
///
/// Returns `InvalidInput` if the instrument fails validation.
pub fn modified_duration(instrument: &Instrument) -> AnalyticsResult<Duration> {
    let mac_dur = instrument_duration(instrument)?;
    modified_from_macaulay(mac_dur, instrument.yield_to_maturity)
}

/// Convert Macaulay duration to modified duration.
///
/// # Arguments
///
/// * `macaulay` - Macaulay duration
/// * `ytm` - Annual yield to maturity (as decimal)
///
/// # Errors
///
/// Returns `InvalidInput` if `1 + ytm` is not positive.
pub fn modified_from_macaulay(macaulay: Duration, ytm: f64) -> AnalyticsResult<Duration> {
    validate_yield(ytm)?;
    Ok(Duration::from(macaulay.years() / (1.0 + ytm)))
}

/// Calculate approximate price change using modified duration.
///
/// # Arguments
///
/// * `mod_duration` - Modified duration
/// * `price` - Current price
/// * `yield_change` - Change in yield (as decimal, e.g., 0.01 for 100bps)
///
/// # Returns
///
/// Approximate price change
#[must_use]
pub fn price_change_from_duration(mod_duration: Duration, price: f64, yield_change: f64) -> f64 {
    -mod_duration.years() * price * yield_change
}
