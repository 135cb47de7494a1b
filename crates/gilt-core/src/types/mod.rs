//! Domain types for fixed income analytics.
//!
//! - [`Instrument`]: Terms of an annual-pay fixed coupon bond
//! - [`CashFlow`]: One period's payment
//! - [`CashFlowSchedule`]: The ordered payments of an instrument

mod cashflow;
mod instrument;

pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use instrument::{decimal_to_f64, validate_maturity, validate_yield, Instrument};
