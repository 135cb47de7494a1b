//! Holding, weighting and configuration types.

mod config;
mod holding;
mod weighting;

pub use config::{AnalyticsConfig, Parallelism, DEFAULT_PARALLEL_THRESHOLD};
pub use holding::{Holding, HoldingBuilder};
pub use weighting::WeightingMethod;
