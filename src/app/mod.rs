//! Application module - the dashboard view controller.
//!
//! This module is organized into several submodules:
//! - `state` - Selection, view and controller struct definitions
//! - `lifecycle` - Construction and default selection
//! - `data_viz` - Selection handlers that recompute tables and charts

mod data_viz;
mod lifecycle;
mod state;

pub use state::{
    ComparisonView, Dashboard, DashboardView, PrimaryView, SelectionQuery, SelectionState,
    ViewOptions,
};
