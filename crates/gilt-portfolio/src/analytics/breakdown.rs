//! Allocation by market value, the data behind the allocation pie chart.

use super::weighting::weights;
use crate::types::WeightingMethod;
use crate::{Portfolio, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the allocation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Holding name.
    pub label: String,

    /// Market value of the holding.
    pub market_value: Decimal,

    /// Share of total market value, in `[0, 1]`.
    pub weight: f64,
}

impl AllocationSlice {
    /// Weight as a percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.weight * 100.0
    }
}

/// Breaks a portfolio down by market value.
///
/// Slices keep portfolio order. Allocation is always by market value,
/// whatever weighting the duration figures use.
///
/// # Errors
///
/// Fails on an empty portfolio or a non-positive total market value.
pub fn allocation(portfolio: &Portfolio) -> PortfolioResult<Vec<AllocationSlice>> {
    let w = weights(&portfolio.holdings, WeightingMethod::MarketValue)?;

    Ok(portfolio
        .holdings
        .iter()
        .zip(w)
        .map(|(h, weight)| AllocationSlice {
            label: h.id.clone(),
            market_value: h.market_value,
            weight,
        })
        .collect())
}
