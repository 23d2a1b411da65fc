//! Dashboard lifecycle - construction and default selection.

use super::{ComparisonView, Dashboard, SelectionState, ViewOptions};
use crate::constants::COMPARISON_PLACEHOLDER;
use crate::data::distinct_artists;
use crate::settings::Settings;
use crate::types::Dataset;
use std::sync::Arc;

impl ViewOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            title: settings.title.clone(),
            date_format: settings.date_format.clone(),
            sales_suffix: settings.sales_suffix.clone(),
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Dashboard {
    /// Create a dashboard with the first artist (sorted order) pre-selected
    /// and the comparison panel hidden.
    pub fn new(dataset: Arc<Dataset>, options: ViewOptions) -> Self {
        let artists = distinct_artists(&dataset);
        let default_artist = artists.first().cloned();

        let mut dashboard = Self {
            dataset,
            artists,
            options,
            selection: SelectionState::default(),
            primary: None,
            comparison: ComparisonView::Hidden {
                message: COMPARISON_PLACEHOLDER.to_string(),
            },
        };

        if let Some(artist) = default_artist {
            dashboard.select_artist(&artist);
        }
        dashboard
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Sorted distinct artist names
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }
}
