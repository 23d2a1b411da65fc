//! CSV and TSV dataset loading
//!
//! Reads the album file through polars with schema inference disabled, so
//! every column arrives as text, then converts each row into a typed
//! [`AlbumRecord`]. Conversion is strict: a single bad date or sales value
//! fails the whole load instead of silently dropping the row.
//!
//! ## Memory Limits
//!
//! Files larger than [`MAX_CSV_SIZE_MB`] are rejected before any parsing.

use crate::constants::{
    COL_ALBUM_TITLE, COL_ARTIST, COL_RELEASE_DATE, COL_SALES, DELIMITER_SNIFF_LINES,
    MAX_CSV_SIZE_MB,
};
use crate::data::error::{DataError, DataResult};
use crate::types::{AlbumRecord, Column, Dataset};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Date-only layouts accepted for `release_date`, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%m/%d/%Y"];

/// Date-time layouts accepted for `release_date`; the time part is discarded
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Load an album dataset from a CSV or TSV file
///
/// # Errors
/// - [`DataError::NotFound`] when `path` does not exist
/// - [`DataError::MissingColumn`] / [`DataError::Schema`] for header or row shape problems
/// - [`DataError::Parse`] when a date or sales cell cannot be converted
pub fn load_dataset(path: &Path) -> DataResult<Dataset> {
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }

    let separator = detect_delimiter(path, &read_head(path)?);
    check_row_widths(path, separator)?;
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_separator(separator)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    let records = records_from_frame(&df)?;
    Ok(Dataset::new(path, records))
}

/// Convert a text-typed frame into album records
fn records_from_frame(df: &DataFrame) -> DataResult<Vec<AlbumRecord>> {
    let artist = find_column(df, Column::Artist.name())?;
    let album_title = find_column(df, Column::AlbumTitle.name())?;
    let release_date = find_column(df, Column::ReleaseDate.name())?;
    let sales = find_column(df, Column::Sales.name())?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        // 1-based data row, header excluded
        let row = idx + 1;

        let artist = cell_text(artist, idx).ok_or_else(|| DataError::Schema {
            row,
            message: format!("empty '{}' value", COL_ARTIST),
        })?;
        let album_title = cell_text(album_title, idx).ok_or_else(|| DataError::Schema {
            row,
            message: format!("empty '{}' value", COL_ALBUM_TITLE),
        })?;

        let raw_date = cell_text(release_date, idx).unwrap_or_default();
        let date = parse_release_date(&raw_date).ok_or_else(|| DataError::Parse {
            row,
            column: COL_RELEASE_DATE.to_string(),
            value: raw_date.clone(),
            reason: if raw_date.is_empty() {
                "empty date cell".to_string()
            } else {
                "not a recognised date".to_string()
            },
        })?;

        let raw_sales = cell_text(sales, idx).unwrap_or_default();
        let sales = parse_sales(&raw_sales).map_err(|reason| DataError::Parse {
            row,
            column: COL_SALES.to_string(),
            value: raw_sales.clone(),
            reason,
        })?;

        records.push(AlbumRecord {
            artist,
            album_title,
            release_date: date,
            sales,
        });
    }

    Ok(records)
}

/// Look up a column by its trimmed header name
fn find_column<'a>(df: &'a DataFrame, wanted: &str) -> DataResult<&'a polars::prelude::Column> {
    let name = df
        .get_column_names()
        .into_iter()
        .find(|name| name.trim() == wanted)
        .map(|name| name.to_string())
        .ok_or_else(|| DataError::MissingColumn {
            column: wanted.to_string(),
        })?;
    Ok(df.column(&name)?)
}

/// Read a cell as trimmed text; nulls and blank cells yield `None`
fn cell_text(column: &polars::prelude::Column, row_idx: usize) -> Option<String> {
    let text = match column.get(row_idx).ok()? {
        AnyValue::Null => return None,
        AnyValue::String(s) => s.trim().to_string(),
        AnyValue::StringOwned(s) => {
            let s_str: &str = &s;
            s_str.trim().to_string()
        }
        other => format!("{}", other).trim().to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Parse a release date in any of the accepted layouts
///
/// Accepts ISO-8601 dates, slash and dot separated variants, US month-first
/// dates, date-times with a space or `T` separator, and RFC 3339 timestamps.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Parse a non-negative sales count, tolerating `,` and `_` digit grouping
pub fn parse_sales(value: &str) -> Result<u64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("empty sales cell".to_string());
    }
    if value.starts_with('-') {
        return Err("sales must not be negative".to_string());
    }

    let digits: String = value.chars().filter(|c| *c != ',' && *c != '_').collect();
    digits
        .parse::<u64>()
        .map_err(|_| "not a whole number".to_string())
}

/// Read the first few lines of the file for delimiter sniffing
fn read_head(path: &Path) -> DataResult<String> {
    let file = std::fs::File::open(path)?;
    let mut head = String::new();
    for line in BufReader::new(file).lines().take(DELIMITER_SNIFF_LINES) {
        head.push_str(&line?);
        head.push('\n');
    }
    Ok(head)
}

/// Reject records whose field count differs from the header's
///
/// Runs before polars sees the file: polars pads short rows with nulls and
/// reports long rows as a generic read failure, and both are schema errors
/// here. Quoted fields may contain the separator and newlines.
fn check_row_widths(path: &Path, separator: u8) -> DataResult<()> {
    let file = std::fs::File::open(path)?;
    let separator = separator as char;

    let mut header_width: Option<usize> = None;
    let mut row = 0;
    let mut fields = 1;
    let mut in_quotes = false;
    let mut blank = true;

    for line in BufReader::new(file).lines() {
        let line = line?;
        for c in line.chars() {
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == separator && !in_quotes {
                fields += 1;
            }
            if !c.is_whitespace() {
                blank = false;
            }
        }
        // Record continues on the next line
        if in_quotes {
            continue;
        }

        if !blank {
            match header_width {
                None => header_width = Some(fields),
                Some(width) => {
                    row += 1;
                    if fields != width {
                        return Err(DataError::Schema {
                            row,
                            message: format!("expected {} fields, found {}", width, fields),
                        });
                    }
                }
            }
        }
        fields = 1;
        blank = true;
    }
    Ok(())
}

/// Detect the delimiter to use for parsing
fn detect_delimiter(path: &Path, head: &str) -> u8 {
    // Check file extension first
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if ext.eq_ignore_ascii_case("tsv") {
            return b'\t';
        }
    }

    let comma_count = head.matches(',').count();
    let tab_count = head.matches('\t').count();
    let semicolon_count = head.matches(';').count();

    if tab_count > comma_count && tab_count > semicolon_count {
        b'\t'
    } else if semicolon_count > comma_count {
        b';'
    } else {
        b','
    }
}
