//! Holding weights.

use crate::types::{Holding, WeightingMethod};
use crate::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;

/// Calculates normalised holding weights.
///
/// ## Formula
///
/// ```text
/// w_i = v_i / Σ v_j
/// ```
///
/// where `v` is the market value, face value or 1 depending on `method`.
/// Weights are returned in holding order and sum to 1.
///
/// # Errors
///
/// Returns `EmptyPortfolio` for an empty slice and `DivisionByZero` when the
/// weight values do not sum to a positive number.
pub fn weights(holdings: &[Holding], method: WeightingMethod) -> PortfolioResult<Vec<f64>> {
    if holdings.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }

    let values = holdings
        .iter()
        .map(|h| holding_f64(h, method.name(), h.weight_value(method)))
        .collect::<PortfolioResult<Vec<f64>>>()?;
    let total: f64 = values.iter().sum();

    if total <= 0.0 || !total.is_finite() {
        return Err(PortfolioError::division_by_zero(format!(
            "{} weights",
            method.name()
        )));
    }

    Ok(values.into_iter().map(|v| v / total).collect())
}

/// Weighted sum `Σ w_i × x_i` of paired weights and values.
pub(crate) fn weighted_sum(weights: &[f64], values: impl IntoIterator<Item = f64>) -> f64 {
    weights.iter().zip(values).map(|(w, x)| w * x).sum()
}

/// `f64` view of a holding's decimal figure, failing with the holding id.
pub(crate) fn holding_f64(holding: &Holding, field: &str, value: Decimal) -> PortfolioResult<f64> {
    gilt_core::types::decimal_to_f64(field, value)
        .map_err(|e| PortfolioError::invalid_holding(&holding.id, e.to_string()))
}
