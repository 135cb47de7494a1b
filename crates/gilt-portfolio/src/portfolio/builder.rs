//! Incremental construction of a [`Portfolio`].

use crate::types::Holding;
use crate::{Portfolio, PortfolioError, PortfolioResult};

/// Collects holdings, then checks them as a whole in [`build`](Self::build).
///
/// Loaders push rows one at a time and only learn about duplicates or an
/// empty file when the portfolio is built.
///
/// ```rust
/// use gilt_portfolio::prelude::*;
///
/// let bond_a = Holding::builder()
///     .id("Bond A")
///     .instrument(Instrument::new(dec!(1_000_000), dec!(0.05), 0.052, 5))
///     .market_value(dec!(980_000))
///     .build()
///     .unwrap();
///
/// let portfolio = PortfolioBuilder::new().name("Core").add_holding(bond_a).build().unwrap();
/// assert_eq!(portfolio.holding_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    name: Option<String>,
    holdings: Vec<Holding>,
}

impl PortfolioBuilder {
    /// Empty builder with no name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Portfolio name, shown in report headers.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends one holding.
    #[must_use]
    pub fn add_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Appends holdings in iteration order.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = Holding>) -> Self {
        self.extend(holdings);
        self
    }

    /// Number of holdings collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// True until the first holding is added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Finishes the portfolio.
    ///
    /// # Errors
    ///
    /// [`PortfolioError::MissingField`] without a name, otherwise whatever
    /// [`Portfolio::validate`] reports.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;

        let portfolio = Portfolio {
            name,
            holdings: self.holdings,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }
}

impl Extend<Holding> for PortfolioBuilder {
    fn extend<I: IntoIterator<Item = Holding>>(&mut self, iter: I) {
        self.holdings.extend(iter);
    }
}
