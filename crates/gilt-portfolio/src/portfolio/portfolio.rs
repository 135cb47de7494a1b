//! Portfolio struct and core methods.

use crate::types::{Holding, WeightingMethod};
use crate::{PortfolioError, PortfolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fixed income portfolio.
///
/// An explicit value passed into every calculation. Holdings are fixed once
/// the portfolio is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Portfolio name.
    pub name: String,

    /// Bond holdings, in input order.
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Returns the number of holdings.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the portfolio has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Looks up a holding by id.
    #[must_use]
    pub fn holding(&self, id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    /// Returns the total market value of all holdings.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the sum leaves the `Decimal` range.
    pub fn total_market_value(&self) -> PortfolioResult<Decimal> {
        checked_total(self.holdings.iter().map(|h| Ok(h.market_value)), "total market value")
    }

    /// Returns the total face value of all holdings.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the sum leaves the `Decimal` range.
    pub fn total_face_value(&self) -> PortfolioResult<Decimal> {
        checked_total(self.holdings.iter().map(|h| Ok(h.face_value())), "total face value")
    }

    /// Returns the total annual coupon income.
    ///
    /// # Errors
    ///
    /// Fails naming the holding whose coupon overflows, or with `Overflow`
    /// if the sum does.
    pub fn total_annual_coupon(&self) -> PortfolioResult<Decimal> {
        checked_total(self.holdings.iter().map(Holding::annual_coupon), "total annual coupon")
    }

    /// Calculates the weight of each holding.
    ///
    /// Returns a vector of (holding_id, weight) pairs; all zero when the
    /// weight values sum to zero.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the weight values overflow when summed.
    pub fn calculate_weights(
        &self,
        method: WeightingMethod,
    ) -> PortfolioResult<Vec<(&str, Decimal)>> {
        let total = checked_total(
            self.holdings.iter().map(|h| Ok(h.weight_value(method))),
            "weight total",
        )?;

        Ok(self
            .holdings
            .iter()
            .map(|h| {
                let weight = h
                    .weight_value(method)
                    .checked_div(total)
                    .unwrap_or(Decimal::ZERO);
                (h.id.as_str(), weight)
            })
            .collect())
    }

    /// Validates the portfolio.
    ///
    /// Checks for:
    /// - At least one holding
    /// - Unique holding ids
    /// - Positive market values
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.holdings.is_empty() {
            return Err(PortfolioError::EmptyPortfolio);
        }

        let mut seen = HashSet::with_capacity(self.holdings.len());
        for holding in &self.holdings {
            if !seen.insert(holding.id.as_str()) {
                return Err(PortfolioError::DuplicateHolding {
                    id: holding.id.clone(),
                });
            }
            if holding.market_value <= Decimal::ZERO {
                return Err(PortfolioError::invalid_holding(
                    &holding.id,
                    "market_value must be positive",
                ));
            }
        }

        Ok(())
    }
}

fn checked_total(
    values: impl Iterator<Item = PortfolioResult<Decimal>>,
    operation: &str,
) -> PortfolioResult<Decimal> {
    values.fold(Ok(Decimal::ZERO), |acc, v| {
        acc?.checked_add(v?)
            .ok_or_else(|| PortfolioError::overflow(operation))
    })
}
