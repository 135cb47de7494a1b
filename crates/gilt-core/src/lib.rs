//! # Gilt Core
//!
//! Core types and errors shared by the Gilt fixed income analytics crates.
//!
//! This crate provides the foundational building blocks used throughout Gilt:
//!
//! - **Types**: [`Instrument`] terms and the annual [`CashFlow`] schedule it produces
//! - **Errors**: [`GiltError`], the invalid-input taxonomy every other crate wraps
//!
//! ## Example
//!
//! ```rust
//! use gilt_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let bond = Instrument::new(dec!(1_000_000), dec!(0.05), 0.052, 5);
//! assert!(bond.validate().is_ok());
//! assert_eq!(bond.annual_coupon().unwrap(), dec!(50_000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{GiltError, GiltResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Instrument};
}

// Re-export commonly used types at crate root
pub use error::{GiltError, GiltResult};
pub use types::{CashFlow, CashFlowSchedule, CashFlowType, Instrument};
