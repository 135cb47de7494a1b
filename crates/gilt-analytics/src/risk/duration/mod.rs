//! Duration calculations for fixed income instruments.
//!
//! Duration measures the sensitivity of a bond's price to changes in interest rates.
//!
//! - **Macaulay Duration**: Weighted average time to receive cash flows
//! - **Modified Duration**: Price sensitivity measure (∂P/∂y × 1/P)

mod macaulay;
mod modified;

pub use macaulay::*;
pub use modified::*;

use serde::{Deserialize, Serialize};

/// Duration value (in years)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Duration(f64);

impl Duration {
    /// Create a new Duration value
    #[must_use]
    pub fn new(years: f64) -> Self {
        Self(years)
    }

    /// Get the duration in years
    #[must_use]
    pub fn years(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} years", self.0)
    }
}

impl From<f64> for Duration {
    fn from(years: f64) -> Self {
        Self(years)
    }
}

impl From<Duration> for f64 {
    fn from(d: Duration) -> Self {
        d.0
    }
}
