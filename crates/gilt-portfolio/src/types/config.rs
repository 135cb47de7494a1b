//! Settings for portfolio aggregation.

use super::WeightingMethod;
use serde::{Deserialize, Serialize};

/// Holdings count at which per-holding analytics switch to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// How per-holding analytics are scheduled.
///
/// Serialized as `"sequential"` or `{ "threshold": 250 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// Always one holding after another.
    Sequential,

    /// Parallel once the portfolio holds at least this many bonds.
    /// Has no effect unless the `parallel` feature is enabled.
    Threshold(usize),
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::Threshold(DEFAULT_PARALLEL_THRESHOLD)
    }
}

/// Settings passed to every portfolio-level calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Basis for holding weights and weighted durations.
    pub weighting: WeightingMethod,

    /// Scheduling of per-holding analytics.
    pub parallelism: Parallelism,
}

impl AnalyticsConfig {
    /// Market-value weighting, parallel above the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Market-value weighting, never parallel.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallelism: Parallelism::Sequential,
            ..Self::default()
        }
    }

    /// Goes parallel from `threshold` holdings upward.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallelism = Parallelism::Threshold(threshold);
        self
    }

    /// Replaces the weighting basis.
    #[must_use]
    pub fn with_weighting(mut self, method: WeightingMethod) -> Self {
        self.weighting = method;
        self
    }

    /// Whether `count` holdings should be analysed on the rayon pool.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        match self.parallelism {
            Parallelism::Sequential => false,
            Parallelism::Threshold(min) => cfg!(feature = "parallel") && count >= min,
        }
    }
}
