//! Formatted table rendering.
//!
//! Turns album rows into a display-ready grid of strings. Formatting is
//! presentation only: the rows are borrowed, sorted by release date in a
//! local copy, and never modified.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let spec = TableSpec::album_info("%Y-%m-%d", " copies");
//! let table = render_table(&rows, &spec);
//! assert_eq!(table.headers, vec!["Release Date", "Album Title", "Sales"]);
//! ```

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_SALES_SUFFIX};
use crate::types::{AlbumRecord, CellValue, Column};
use serde::Serialize;
use std::fmt::Write;

/// How a column's values are turned into display text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ColumnFormat {
    /// Verbatim text (integers and dates fall back to their default display)
    Text,
    /// A chrono strftime pattern, e.g. `%Y-%m-%d`
    Date { pattern: String },
    /// Integer with optional thousands grouping and a unit suffix
    Integer { grouping: bool, suffix: String },
}

impl ColumnFormat {
    pub fn date(pattern: impl Into<String>) -> Self {
        ColumnFormat::Date {
            pattern: pattern.into(),
        }
    }

    pub fn grouped(suffix: impl Into<String>) -> Self {
        ColumnFormat::Integer {
            grouping: true,
            suffix: suffix.into(),
        }
    }

    /// Render a single cell
    pub fn apply(&self, value: CellValue<'_>) -> String {
        match (self, value) {
            (_, CellValue::Text(s)) => s.to_string(),
            (ColumnFormat::Date { pattern }, CellValue::Date(d)) => {
                // Invalid patterns fall back to ISO
                let mut out = String::new();
                match write!(out, "{}", d.format(pattern)) {
                    Ok(()) => out,
                    Err(_) => d.to_string(),
                }
            }
            (ColumnFormat::Integer { grouping, suffix }, CellValue::Integer(n)) => {
                let digits = if *grouping {
                    format_thousands(n)
                } else {
                    n.to_string()
                };
                format!("{}{}", digits, suffix)
            }
            (_, CellValue::Date(d)) => d.to_string(),
            (_, CellValue::Integer(n)) => n.to_string(),
        }
    }
}

/// Ordered list of displayed columns with their formats
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub columns: Vec<(Column, ColumnFormat)>,
}

impl TableSpec {
    pub fn new(columns: Vec<(Column, ColumnFormat)>) -> Self {
        Self { columns }
    }

    /// Info panel for one artist: date, title, grouped sales
    pub fn album_info(date_pattern: &str, sales_suffix: &str) -> Self {
        Self::new(vec![
            (Column::ReleaseDate, ColumnFormat::date(date_pattern)),
            (Column::AlbumTitle, ColumnFormat::Text),
            (Column::Sales, ColumnFormat::grouped(sales_suffix)),
        ])
    }

    /// Full dataset panel: every column, only the date formatted
    pub fn full_dataset(date_pattern: &str) -> Self {
        Self::new(vec![
            (Column::Artist, ColumnFormat::Text),
            (Column::AlbumTitle, ColumnFormat::Text),
            (Column::ReleaseDate, ColumnFormat::date(date_pattern)),
            (Column::Sales, ColumnFormat::Text),
        ])
    }
}

impl Default for TableSpec {
    fn default() -> Self {
        Self::album_info(DEFAULT_DATE_FORMAT, DEFAULT_SALES_SUFFIX)
    }
}

/// A display-ready grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render rows into a grid sorted by release date ascending
///
/// The sort is stable, so rows sharing a date keep their input order.
pub fn render_table(rows: &[&AlbumRecord], spec: &TableSpec) -> TableView {
    let mut sorted: Vec<&AlbumRecord> = rows.to_vec();
    sorted.sort_by_key(|r| r.release_date);
    render_table_unsorted(&sorted, spec)
}

/// Render rows in their given order, without sorting
pub fn render_table_unsorted(rows: &[&AlbumRecord], spec: &TableSpec) -> TableView {
    TableView {
        headers: spec
            .columns
            .iter()
            .map(|(column, _)| column.label().to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|r| {
                spec.columns
                    .iter()
                    .map(|(column, format)| format.apply(r.cell(*column)))
                    .collect()
            })
            .collect(),
    }
}

/// Group digits in threes with commas (e.g., `1234567` -> `"1,234,567"`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
