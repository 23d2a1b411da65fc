//! Unit tests for Album Dashboard.

mod filter_tests;
mod loading_tests;
mod settings_tests;
mod snapshot_tests;
mod table_tests;
