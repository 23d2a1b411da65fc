//! Integration tests for Album Dashboard.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod server_tests;
