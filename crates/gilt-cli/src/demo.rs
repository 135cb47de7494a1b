//! Built-in sample portfolio used when no portfolio file is given.

use gilt_core::Instrument;
use gilt_portfolio::{Holding, Portfolio, PortfolioResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Name of the built-in portfolio.
pub const DEMO_NAME: &str = "Sample Bond Portfolio";

/// (name, face value, coupon rate, maturity years, market price, yield to maturity)
const DEMO_BONDS: [(&str, Decimal, Decimal, u32, Decimal, f64); 3] = [
    ("Bond A", dec!(1_000_000), dec!(0.05), 5, dec!(980_000), 0.052),
    ("Bond B", dec!(500_000), dec!(0.045), 7, dec!(510_000), 0.047),
    ("Bond C", dec!(750_000), dec!(0.06), 10, dec!(740_000), 0.059),
];

/// The three-bond sample portfolio.
pub fn demo_portfolio() -> PortfolioResult<Portfolio> {
    let holdings = DEMO_BONDS
        .iter()
        .map(|&(name, face, coupon, maturity, price, ytm)| {
            Holding::builder()
                .id(name)
                .instrument(Instrument::new(face, coupon, ytm, maturity))
                .market_value(price)
                .build()
        })
        .collect::<PortfolioResult<Vec<_>>>()?;

    Portfolio::builder(DEMO_NAME).add_holdings(holdings).build()
}
