//! Row selection over a loaded dataset.
//!
//! Both filters are pure projections: they borrow matching records in
//! dataset order and never copy or reorder them. Artist names match
//! exactly and case-sensitively.

use crate::types::{AlbumRecord, Dataset};
use std::collections::{BTreeSet, HashSet};

/// All records whose artist equals `artist`
pub fn filter_by_artist<'a>(dataset: &'a Dataset, artist: &str) -> Vec<&'a AlbumRecord> {
    dataset.iter().filter(|r| r.artist == artist).collect()
}

/// All records whose artist is one of `artists`
///
/// An empty set yields an empty result.
pub fn filter_by_artists<'a, S>(dataset: &'a Dataset, artists: &[S]) -> Vec<&'a AlbumRecord>
where
    S: AsRef<str>,
{
    if artists.is_empty() {
        return Vec::new();
    }
    let wanted: HashSet<&str> = artists.iter().map(|a| a.as_ref()).collect();
    dataset
        .iter()
        .filter(|r| wanted.contains(r.artist.as_str()))
        .collect()
}

/// Sorted, deduplicated artist names
pub fn distinct_artists(dataset: &Dataset) -> Vec<String> {
    dataset
        .iter()
        .map(|r| r.artist.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
