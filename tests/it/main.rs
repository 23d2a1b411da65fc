//! Single test binary entry point.
//!
//! All tests share one binary to keep linking to a single pass.
//!
//! Structure:
//! - helpers: Fixture files and dataset builders
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;
