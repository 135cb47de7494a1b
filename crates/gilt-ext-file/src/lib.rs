//! # Gilt Ext File
//!
//! File-based inputs for Gilt:
//! - CSV and JSON portfolio loaders
//! - CSV-based treasury-yield history source
//!
//! Every loader reads the whole file up front. A missing file, a malformed
//! row or an unparsable value fails the load; nothing is skipped silently.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod portfolio;
mod yield_history;

pub use error::{FileError, FileResult};
pub use portfolio::*;
pub use yield_history::*;
