//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDatasetBuilder` - Builder pattern for in-memory datasets
//! - `write_fixture()` - Writes a dataset file into a temp directory
//! - Common fixture contents

use album_dashboard::types::{AlbumRecord, Dataset};
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two artists, three albums
pub const SMALL_CSV: &str = "\
artist,album_title,release_date,sales
A,X,2020-01-01,1000
B,Y,2021-06-15,2500
A,W,2018-05-20,700
";

/// Builder for in-memory datasets.
///
/// # Example
/// ```ignore
/// let dataset = TestDatasetBuilder::new()
///     .album("A", "X", (2020, 1, 1), 1000)
///     .build();
/// ```
#[derive(Default)]
pub struct TestDatasetBuilder {
    records: Vec<AlbumRecord>,
}

impl TestDatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one album row.
    pub fn album(mut self, artist: &str, title: &str, date: (i32, u32, u32), sales: u64) -> Self {
        self.records
            .push(AlbumRecord::new(artist, title, ymd(date.0, date.1, date.2), sales));
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::from_records(self.records)
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Write `contents` to `name` inside a fresh temp directory.
///
/// The directory is returned so the caller keeps it alive.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    (dir, path)
}
