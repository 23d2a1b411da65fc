//! Data loading and selection module
//!
//! This module reads the album dataset from disk, memoizes it per path,
//! and slices it by artist for the dashboard views.
//!
//! ## Error Handling
//!
//! All load operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `NotFound`: the dataset file is missing
//! - `MissingColumn`/`Schema`: the header or a row has the wrong shape
//! - `Parse`: a date or sales cell cannot be converted
//!
//! Filtering never fails; no matches is an empty result.

mod cache;
mod chart_engine;
mod csv_parser;
mod error;
mod filter;

pub use cache::*;
pub use chart_engine::*;
pub use csv_parser::*;
pub use error::*;
pub use filter::*;
