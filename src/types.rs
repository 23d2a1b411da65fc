//! Core types for the album dashboard.
//!
//! This module defines the records loaded from the dataset file and the
//! column vocabulary shared by the table and chart renderers.

use crate::constants::{COL_ALBUM_TITLE, COL_ARTIST, COL_RELEASE_DATE, COL_SALES};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Records
// ============================================================================

/// One row of the dataset: a single album release.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub artist: String,
    pub album_title: String,
    pub release_date: NaiveDate,
    pub sales: u64,
}

impl AlbumRecord {
    pub fn new(
        artist: impl Into<String>,
        album_title: impl Into<String>,
        release_date: NaiveDate,
        sales: u64,
    ) -> Self {
        Self {
            artist: artist.into(),
            album_title: album_title.into(),
            release_date,
            sales,
        }
    }

    /// Borrow the value held in `column`
    pub fn cell(&self, column: Column) -> CellValue<'_> {
        match column {
            Column::Artist => CellValue::Text(&self.artist),
            Column::AlbumTitle => CellValue::Text(&self.album_title),
            Column::ReleaseDate => CellValue::Date(self.release_date),
            Column::Sales => CellValue::Integer(self.sales),
        }
    }
}

/// A borrowed, typed view of a single cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Date(NaiveDate),
    Integer(u64),
}

// ============================================================================
// Dataset
// ============================================================================

/// The full, ordered collection of album records loaded from one file.
///
/// A `Dataset` is immutable once built. Filtering and rendering borrow
/// from it and never write back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// File the records were read from (empty for in-memory datasets)
    pub source: PathBuf,
    records: Vec<AlbumRecord>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, records: Vec<AlbumRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    /// Build a dataset with no file origin (tests and fixtures)
    pub fn from_records(records: Vec<AlbumRecord>) -> Self {
        Self::new(PathBuf::new(), records)
    }

    pub fn records(&self) -> &[AlbumRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlbumRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a AlbumRecord;
    type IntoIter = std::slice::Iter<'a, AlbumRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// Columns
// ============================================================================

/// The columns of an album record, in file order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Artist,
    AlbumTitle,
    ReleaseDate,
    Sales,
}

impl Column {
    /// Header name as it appears in the dataset file
    pub fn name(&self) -> &'static str {
        match self {
            Column::Artist => COL_ARTIST,
            Column::AlbumTitle => COL_ALBUM_TITLE,
            Column::ReleaseDate => COL_RELEASE_DATE,
            Column::Sales => COL_SALES,
        }
    }

    /// Human-readable heading used by tables and chart axes
    pub fn label(&self) -> &'static str {
        match self {
            Column::Artist => "Artist",
            Column::AlbumTitle => "Album Title",
            Column::ReleaseDate => "Release Date",
            Column::Sales => "Sales",
        }
    }
}
