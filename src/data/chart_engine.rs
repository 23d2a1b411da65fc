//! Chart data processing engine
//!
//! This module turns filtered album rows into chart-ready models.
//! Sorting, series grouping and colour assignment happen here rather than
//! in the SVG render path.

use crate::types::{AlbumRecord, Column};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// A colour in HSL space, each channel in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

/// Chart color palette - highly distinct colors for data visualization
pub const CHART_COLORS: [Hsla; 8] = [
    Hsla { h: 220.0 / 360.0, s: 0.85, l: 0.55, a: 1.0 },  // Bright Blue
    Hsla { h: 140.0 / 360.0, s: 0.75, l: 0.45, a: 1.0 },  // Green
    Hsla { h: 30.0 / 360.0,  s: 0.95, l: 0.55, a: 1.0 },  // Orange
    Hsla { h: 270.0 / 360.0, s: 0.75, l: 0.55, a: 1.0 },  // Violet/Purple
    Hsla { h: 0.0 / 360.0,   s: 0.80, l: 0.55, a: 1.0 },  // Red
    Hsla { h: 175.0 / 360.0, s: 0.75, l: 0.45, a: 1.0 },  // Cyan/Teal
    Hsla { h: 55.0 / 360.0,  s: 0.90, l: 0.50, a: 1.0 },  // Yellow
    Hsla { h: 320.0 / 360.0, s: 0.75, l: 0.55, a: 1.0 },  // Pink/Magenta
];

/// Palette colour for the `index`-th distinct key
pub fn palette_color(index: usize) -> Hsla {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// Sales axis title carrying the unit, e.g. `Sales (copies)`
pub fn sales_axis_label(sales_suffix: &str) -> String {
    match sales_suffix.trim() {
        "" => Column::Sales.label().to_string(),
        unit => format!("{} ({})", Column::Sales.label(), unit),
    }
}

// ============================================================================
// Bar chart
// ============================================================================

/// Processed bar chart: one bar per album of a single artist
#[derive(Clone, Debug, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    /// X-axis label
    pub x_label: String,
    /// Y-axis label
    pub y_label: String,
    /// Maximum value for scaling
    pub max_value: u64,
}

/// A single bar
#[derive(Clone, Debug, Serialize)]
pub struct Bar {
    /// Album title (X-axis)
    pub label: String,
    /// Sales count (Y-axis)
    pub value: u64,
    pub release_date: NaiveDate,
    /// Fill keyed by album title
    pub color: Hsla,
}

/// Build a bar chart from one artist's rows
///
/// Bars are ordered by release date ascending. Each distinct album title
/// gets its own palette colour; no legend is produced since the colours
/// only repeat the x-axis labels.
pub fn process_bar_chart(rows: &[&AlbumRecord], sales_suffix: &str) -> BarChart {
    let mut sorted: Vec<&AlbumRecord> = rows.to_vec();
    sorted.sort_by_key(|r| r.release_date);

    let mut title_colors: HashMap<&str, Hsla> = HashMap::new();
    let bars: Vec<Bar> = sorted
        .iter()
        .map(|r| {
            let next = title_colors.len();
            let color = *title_colors
                .entry(r.album_title.as_str())
                .or_insert_with(|| palette_color(next));
            Bar {
                label: r.album_title.clone(),
                value: r.sales,
                release_date: r.release_date,
                color,
            }
        })
        .collect();

    BarChart {
        max_value: bars.iter().map(|b| b.value).max().unwrap_or(0),
        bars,
        x_label: Column::AlbumTitle.label().to_string(),
        y_label: sales_axis_label(sales_suffix),
    }
}

// ============================================================================
// Line chart
// ============================================================================

/// Processed time-series chart: one line per artist
#[derive(Clone, Debug, Serialize)]
pub struct LineChart {
    pub series: Vec<Series>,
    pub x_label: String,
    pub y_label: String,
    /// Earliest release date across all series
    pub min_date: Option<NaiveDate>,
    /// Latest release date across all series
    pub max_date: Option<NaiveDate>,
    /// Maximum value for scaling
    pub max_value: u64,
}

/// One artist's line
#[derive(Clone, Debug, Serialize)]
pub struct Series {
    pub artist: String,
    pub color: Hsla,
    /// Points in release date order
    pub points: Vec<LinePoint>,
}

/// A marker on a line; the album title is revealed on hover
#[derive(Clone, Debug, Serialize)]
pub struct LinePoint {
    pub release_date: NaiveDate,
    pub value: u64,
    pub album_title: String,
}

/// Build a line chart from rows spanning several artists
///
/// Series appear in order of each artist's earliest release, matching the
/// order in which their first markers appear along the x-axis.
pub fn process_line_chart(rows: &[&AlbumRecord], sales_suffix: &str) -> LineChart {
    let mut sorted: Vec<&AlbumRecord> = rows.to_vec();
    sorted.sort_by_key(|r| r.release_date);

    let mut series: Vec<Series> = Vec::new();
    let mut index_by_artist: HashMap<&str, usize> = HashMap::new();

    for r in &sorted {
        let idx = match index_by_artist.get(r.artist.as_str()) {
            Some(idx) => *idx,
            None => {
                let idx = series.len();
                series.push(Series {
                    artist: r.artist.clone(),
                    color: palette_color(idx),
                    points: Vec::new(),
                });
                index_by_artist.insert(r.artist.as_str(), idx);
                idx
            }
        };
        series[idx].points.push(LinePoint {
            release_date: r.release_date,
            value: r.sales,
            album_title: r.album_title.clone(),
        });
    }

    LineChart {
        series,
        x_label: Column::ReleaseDate.label().to_string(),
        y_label: sales_axis_label(sales_suffix),
        min_date: sorted.first().map(|r| r.release_date),
        max_date: sorted.last().map(|r| r.release_date),
        max_value: sorted.iter().map(|r| r.sales).max().unwrap_or(0),
    }
}
