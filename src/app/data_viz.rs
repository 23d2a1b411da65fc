//! Data visualization handlers - selection changes and view assembly

use super::{ComparisonView, Dashboard, DashboardView, PrimaryView, SelectionQuery};
use crate::constants::COMPARISON_PLACEHOLDER;
use crate::data::{filter_by_artist, filter_by_artists, process_bar_chart, process_line_chart};
use crate::data_table::{TableSpec, render_table, render_table_unsorted};
use crate::types::AlbumRecord;
use tracing::{debug, warn};

impl Dashboard {
    /// Select the primary artist and recompute its table and bar chart.
    ///
    /// Names outside the dataset's artist set are rejected and the current
    /// selection is kept. Returns whether the selection was applied.
    pub fn select_artist(&mut self, artist: &str) -> bool {
        if !self.is_known_artist(artist) {
            warn!("Ignoring unknown artist selection '{}'", artist);
            return false;
        }

        let rows = filter_by_artist(&self.dataset, artist);
        let spec = TableSpec::album_info(&self.options.date_format, &self.options.sales_suffix);
        debug!("Primary artist '{}' has {} albums", artist, rows.len());

        self.primary = Some(PrimaryView {
            artist: artist.to_string(),
            table: render_table(&rows, &spec),
            chart: process_bar_chart(&rows, &self.options.sales_suffix),
        });
        self.selection.artist = Some(artist.to_string());
        true
    }

    /// Replace the rival set and recompute the comparison panel.
    ///
    /// Unknown names are dropped and duplicates collapsed, keeping first
    /// occurrence order. Two or more remaining rivals show the line chart;
    /// fewer hide it behind the placeholder message.
    pub fn select_rivals<I, S>(&mut self, rivals: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<String> = Vec::new();
        for rival in rivals {
            let rival = rival.as_ref();
            if !self.is_known_artist(rival) {
                warn!("Ignoring unknown rival '{}'", rival);
                continue;
            }
            if !accepted.iter().any(|r| r == rival) {
                accepted.push(rival.to_string());
            }
        }

        self.selection.rivals = accepted;
        self.comparison = if self.selection.wants_comparison() {
            let rows = filter_by_artists(&self.dataset, self.selection.rivals.as_slice());
            debug!(
                "Comparing {} rivals over {} albums",
                self.selection.rivals.len(),
                rows.len()
            );
            ComparisonView::Shown {
                rivals: self.selection.rivals.clone(),
                chart: process_line_chart(&rows, &self.options.sales_suffix),
            }
        } else {
            ComparisonView::Hidden {
                message: COMPARISON_PLACEHOLDER.to_string(),
            }
        };
    }

    /// Apply a request's selection: primary artist first, then rivals.
    pub fn apply_query(&mut self, query: &SelectionQuery) {
        if let Some(artist) = &query.artist {
            self.select_artist(artist);
        }
        self.select_rivals(&query.rivals);
    }

    /// Current primary view, absent only for an empty dataset
    pub fn primary(&self) -> Option<&PrimaryView> {
        self.primary.as_ref()
    }

    pub fn comparison(&self) -> &ComparisonView {
        &self.comparison
    }

    /// Snapshot of every panel for rendering
    pub fn view(&self) -> DashboardView {
        let all: Vec<&AlbumRecord> = self.dataset.iter().collect();
        DashboardView {
            title: self.options.title.clone(),
            artists: self.artists.clone(),
            selection: self.selection.clone(),
            primary: self.primary.clone(),
            comparison: self.comparison.clone(),
            full_table: render_table_unsorted(
                &all,
                &TableSpec::full_dataset(&self.options.date_format),
            ),
            sales_suffix: self.options.sales_suffix.clone(),
        }
    }

    fn is_known_artist(&self, artist: &str) -> bool {
        self.artists
            .binary_search_by(|a| a.as_str().cmp(artist))
            .is_ok()
    }
}
