//! Cash flow generation for annual-pay fixed coupon bonds.

mod generator;

pub use generator::CashFlowGenerator;
