//! Application state - selection and view state for the dashboard.

use crate::constants::MIN_RIVALS_FOR_COMPARISON;
use crate::data::{BarChart, LineChart};
use crate::data_table::TableView;
use crate::types::Dataset;
use serde::Serialize;
use std::sync::Arc;

/// Display options shared by every view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewOptions {
    pub title: String,
    pub date_format: String,
    pub sales_suffix: String,
}

/// The view controller.
///
/// Holds the shared dataset, the selection, and the views derived from
/// them. Views are recomputed synchronously by the selection handlers.
pub struct Dashboard {
    pub(super) dataset: Arc<Dataset>,
    /// Sorted distinct artists, the only valid selection values
    pub(super) artists: Vec<String>,
    pub(super) options: ViewOptions,
    pub(super) selection: SelectionState,
    pub(super) primary: Option<PrimaryView>,
    pub(super) comparison: ComparisonView,
}

/// Info table and bar chart for the primary artist
#[derive(Clone, Debug, Serialize)]
pub struct PrimaryView {
    pub artist: String,
    pub table: TableView,
    pub chart: BarChart,
}

/// Everything the page renderer needs for one response
#[derive(Clone, Debug, Serialize)]
pub struct DashboardView {
    pub title: String,
    /// Options for both selectors
    pub artists: Vec<String>,
    pub selection: SelectionState,
    pub primary: Option<PrimaryView>,
    pub comparison: ComparisonView,
    /// Collapsible full dataset panel
    pub full_table: TableView,
    pub sales_suffix: String,
}

/// The user's current choices.
///
/// Holds names only; it never touches the dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Primary artist; `None` only when the dataset is empty
    pub artist: Option<String>,
    /// Rival artists for the comparison chart, in selection order
    pub rivals: Vec<String>,
}

impl SelectionState {
    /// Whether enough rivals are chosen to show the comparison chart
    pub fn wants_comparison(&self) -> bool {
        self.rivals.len() >= MIN_RIVALS_FOR_COMPARISON
    }
}

/// Comparison panel state
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ComparisonView {
    /// Fewer than two rivals: an informational message instead of a chart
    Hidden { message: String },
    /// Two or more rivals: one line per artist
    Shown { rivals: Vec<String>, chart: LineChart },
}

impl ComparisonView {
    pub fn is_shown(&self) -> bool {
        matches!(self, ComparisonView::Shown { .. })
    }

    pub fn chart(&self) -> Option<&LineChart> {
        match self {
            ComparisonView::Shown { chart, .. } => Some(chart),
            ComparisonView::Hidden { .. } => None,
        }
    }
}

/// Selection as carried in a request query string
///
/// `?artist=BTS&rival=BTS&rival=SEVENTEEN`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionQuery {
    pub artist: Option<String>,
    pub rivals: Vec<String>,
}

impl SelectionQuery {
    /// Parse the query part of a request URL (with or without the path)
    ///
    /// Form encoding is honoured (`+` means space). Unknown keys and
    /// undecodable values are skipped.
    pub fn from_url(url: &str) -> Self {
        let query = match url.split_once('?') {
            Some((_, query)) => query,
            None => return Self::default(),
        };
        // Drop any fragment
        let query = query.split('#').next().unwrap_or_default();

        let mut selection = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Some(value) = decode_component(value) else {
                continue;
            };
            match key {
                "artist" if !value.is_empty() => selection.artist = Some(value),
                "rival" if !value.is_empty() => selection.rivals.push(value),
                _ => {}
            }
        }
        selection
    }
}

fn decode_component(value: &str) -> Option<String> {
    let value = value.replace('+', " ");
    urlencoding::decode(&value).ok().map(|v| v.into_owned())
}
