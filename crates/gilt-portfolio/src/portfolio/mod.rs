//! The [`Portfolio`] value and its builder.

mod builder;
#[allow(clippy::module_inception)]
mod portfolio;

pub use builder::PortfolioBuilder;
pub use portfolio::Portfolio;
