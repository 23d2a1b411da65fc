//! Album Dashboard - an interactive album sales dashboard.
//!
//! Loads a delimited file of album sales, lets the user pick an artist and
//! a set of rivals, and serves the resulting tables and charts as a local
//! web page.
//!
//! ## Modules
//!
//! - `data` - Loading, caching, filtering and chart models
//! - `data_table` - Formatted table rendering
//! - `app` - The view controller and selection handlers
//! - `render` - HTML page and SVG chart output
//! - `server` - The local HTTP request loop

pub mod app;
pub mod constants;
pub mod data;
pub mod data_table;
pub mod perf;
pub mod render;
pub mod server;
pub mod settings;
pub mod types;
