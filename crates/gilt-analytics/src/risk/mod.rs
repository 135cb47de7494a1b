//! Risk analytics for fixed income instruments.
//!
//! - **Duration**: Macaulay and Modified
//!
//! # Example
//!
//! ```rust
//! use gilt_analytics::risk::{instrument_duration, modified_duration};
//! use gilt_core::Instrument;
//! use rust_decimal_macros::dec;
//!
//! let bond = Instrument::new(dec!(750_000), dec!(0.06), 0.059, 10);
//! let mac = instrument_duration(&bond).unwrap();
//! let modified = modified_duration(&bond).unwrap();
//! assert!(modified < mac);
//! ```

pub mod duration;

pub use duration::{
    instrument_duration, macaulay_duration, macaulay_duration_from_cash_flows, modified_duration,
    modified_from_macaulay, price_change_from_duration, Duration,
};
