//! Basis on which holdings are weighted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What each holding contributes to the portfolio before normalisation.
///
/// Portfolio duration is conventionally weighted by market value; par and
/// equal weighting are offered for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingMethod {
    /// Quoted market price in currency units.
    #[default]
    MarketValue,

    /// Face (redemption) amount.
    ParValue,

    /// One share per holding.
    EqualWeight,
}

impl WeightingMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 3] = [Self::MarketValue, Self::ParValue, Self::EqualWeight];

    /// Title-case name for reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarketValue => "Market Value",
            Self::ParValue => "Par Value",
            Self::EqualWeight => "Equal Weight",
        }
    }
}

impl fmt::Display for WeightingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the short forms `mv`, `par`, `equal` and the serialized
/// names, case-insensitively, with `-` and `_` interchangeable.
impl FromStr for WeightingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mv" | "market" | "market_value" => Ok(Self::MarketValue),
            "par" | "face" | "par_value" => Ok(Self::ParValue),
            "eq" | "equal" | "equal_weight" => Ok(Self::EqualWeight),
            other => Err(format!(
                "unknown weighting '{other}', expected one of: mv, par, equal"
            )),
        }
    }
}
