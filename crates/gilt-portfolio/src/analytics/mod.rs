//! Portfolio-level analytics.
//!
//! This module provides aggregated analytics for portfolios, including:
//! - Normalised holding weights
//! - Per-holding coupon income and duration
//! - Weighted Macaulay and modified duration
//! - Allocation breakdown for charting
//!
//! All functions are pure - they take holdings and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod breakdown;
mod holding;
mod parallel;
mod risk;
mod summary;
mod weighting;

pub use breakdown::*;
pub use holding::*;
pub use parallel::*;
pub use risk::*;
pub use summary::*;
pub use weighting::*;
