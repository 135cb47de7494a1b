//! # Gilt Analytics
//!
//! Duration analytics for annual-pay fixed coupon bonds.
//!
//! - **Cash Flows**: the annual schedule of an [`Instrument`](gilt_core::Instrument),
//!   with principal redeemed in the final period
//! - **Risk**: Macaulay duration (present-value-weighted average time to
//!   receipt) and modified duration
//! - **Pricing**: present value of a schedule at a given yield
//!
//! Every function here is pure: explicit inputs, no I/O, no shared state.
//!
//! ## Usage
//!
//! ```rust
//! use gilt_analytics::prelude::*;
//!
//! let duration = macaulay_duration(1_000_000.0, 0.05, 0.052, 5).unwrap();
//! assert!((duration.years() - 4.54).abs() < 0.01);
//!
//! // Invalid maturities fail instead of producing NaN.
//! assert!(macaulay_duration(1_000_000.0, 0.05, 0.052, 0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cashflows;
pub mod error;
pub mod pricing;
pub mod risk;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use gilt_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Cash flows
    pub use crate::cashflows::CashFlowGenerator;

    // Pricing
    pub use crate::pricing::{discount_factor, present_value};

    // Risk
    pub use crate::risk::{
        instrument_duration, macaulay_duration, macaulay_duration_from_cash_flows,
        modified_duration, modified_from_macaulay, price_change_from_duration, Duration,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = AnalyticsError::InvalidInput("test".to_string());
        assert!(err.to_string().contains("test"));
    }
}
