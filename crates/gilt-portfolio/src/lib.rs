//! # Gilt Portfolio
//!
//! Portfolio-level duration analytics for fixed income securities.
//!
//! This crate aggregates instrument-level calculations from `gilt-analytics`
//! into portfolio figures.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **No process-wide state**: the [`Portfolio`] is a value passed into every call
//! - **Errors propagate**: an invalid instrument stops the calculation and
//!   names the holding; no default duration is substituted
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use gilt_portfolio::prelude::*;
//!
//! let portfolio = PortfolioBuilder::new()
//!     .name("Core Bonds")
//!     .add_holding(
//!         Holding::builder()
//!             .id("Bond A")
//!             .instrument(Instrument::new(dec!(1_000_000), dec!(0.05), 0.052, 5))
//!             .market_value(dec!(980_000))
//!             .build()
//!             .unwrap(),
//!     )
//!     .add_holding(
//!         Holding::builder()
//!             .id("Bond B")
//!             .instrument(Instrument::new(dec!(500_000), dec!(0.045), 0.047, 7))
//!             .market_value(dec!(510_000))
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let summary = calculate_portfolio_summary(&portfolio, &AnalyticsConfig::default()).unwrap();
//! assert!(summary.duration > 4.5 && summary.duration < 6.2);
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Weights, per-holding analytics, weighted duration, summary, allocation
//! - [`portfolio`] - Portfolio and builder types
//! - [`types`] - Core types (Holding, Config, WeightingMethod)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod error;
pub mod portfolio;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{AnalyticsConfig, Holding, HoldingBuilder, Parallelism, WeightingMethod};

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioBuilder};

// Re-export analytics types and functions
pub use analytics::{
    allocation, calculate_portfolio_summary, holding_analytics, maybe_parallel_map,
    weighted_duration, weighted_modified_duration, weights, AllocationSlice, HoldingAnalytics,
    HoldingSummary, PortfolioSummary,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use gilt_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Holding and config types
    pub use crate::types::{AnalyticsConfig, Holding, HoldingBuilder, Parallelism, WeightingMethod};

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Analytics
    pub use crate::analytics::{
        allocation, calculate_portfolio_summary, holding_analytics, weighted_duration,
        weighted_modified_duration, weights, AllocationSlice, HoldingAnalytics, HoldingSummary,
        PortfolioSummary,
    };

    // Re-export commonly used types from dependencies
    pub use gilt_analytics::risk::Duration;
    pub use gilt_core::Instrument;
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
