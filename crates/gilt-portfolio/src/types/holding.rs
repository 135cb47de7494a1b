//! Holding representation: instrument terms plus the quoted market value.

use super::WeightingMethod;
use gilt_core::Instrument;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PortfolioError, PortfolioResult};

/// A single holding in a portfolio.
///
/// Market value is the instrument's market price as a currency amount
/// (980,000 for a 1,000,000 face bond quoted at 98), not a percentage of par.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier for this position (the instrument name).
    pub id: String,

    /// Bond terms used for coupon and duration calculations.
    pub instrument: Instrument,

    /// Market value in currency units.
    pub market_value: Decimal,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the face (par) amount held.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.instrument.face_value
    }

    /// Returns the annual coupon payment.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Analytics`] naming this holding if the
    /// coupon overflows `Decimal`.
    pub fn annual_coupon(&self) -> PortfolioResult<Decimal> {
        self.instrument
            .annual_coupon()
            .map_err(|e| PortfolioError::analytics(&self.id, e.into()))
    }

    /// Returns the market price as a percentage of face value, `None` for a
    /// zero face value or a ratio outside the `Decimal` range.
    #[must_use]
    pub fn price_pct(&self) -> Option<Decimal> {
        self.market_value
            .checked_div(self.instrument.face_value)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }

    /// Returns the unnormalised weight of this holding for the given method.
    ///
    /// For MarketValue, returns the market value.
    /// For ParValue, returns the face value.
    /// For EqualWeight, returns 1.
    #[must_use]
    pub fn weight_value(&self, method: WeightingMethod) -> Decimal {
        match method {
            WeightingMethod::MarketValue => self.market_value,
            WeightingMethod::ParValue => self.instrument.face_value,
            WeightingMethod::EqualWeight => Decimal::ONE,
        }
    }
}

/// Builder for constructing a Holding.
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    id: Option<String>,
    instrument: Option<Instrument>,
    market_value: Option<Decimal>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the holding ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the instrument terms.
    #[must_use]
    pub fn instrument(mut self, instrument: Instrument) -> Self {
        self.instrument = Some(instrument);
        self
    }

    /// Sets the market value in currency units.
    #[must_use]
    pub fn market_value(mut self, value: Decimal) -> Self {
        self.market_value = Some(value);
        self
    }

    /// Builds the holding.
    ///
    /// Instrument terms are not validated here; an invalid instrument fails
    /// later, when its analytics are calculated.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the id is blank, or
    /// the market value is not positive.
    pub fn build(self) -> PortfolioResult<Holding> {
        let id = self.id.ok_or_else(|| PortfolioError::missing_field("id"))?;

        if id.trim().is_empty() {
            return Err(PortfolioError::invalid_holding(&id, "id cannot be blank"));
        }

        let instrument = self
            .instrument
            .ok_or_else(|| PortfolioError::missing_field("instrument"))?;

        let market_value = self
            .market_value
            .ok_or_else(|| PortfolioError::missing_field("market_value"))?;

        if market_value <= Decimal::ZERO {
            return Err(PortfolioError::invalid_holding(
                &id,
                "market_value must be positive",
            ));
        }

        Ok(Holding {
            id,
            instrument,
            market_value,
        })
    }
}
