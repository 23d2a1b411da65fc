//! Unit tests for artist filtering.

use crate::helpers::TestDatasetBuilder;
use album_dashboard::data::{distinct_artists, filter_by_artist, filter_by_artists};
use album_dashboard::types::Dataset;

fn dataset() -> Dataset {
    TestDatasetBuilder::new()
        .album("A", "X", (2020, 1, 1), 1000)
        .album("B", "Y", (2021, 6, 15), 2500)
        .album("C", "Z", (2019, 3, 3), 400)
        .album("A", "W", (2018, 5, 20), 700)
        .build()
}

#[test]
fn test_single_artist_filter_keeps_order() {
    let dataset = dataset();
    let rows = filter_by_artist(&dataset, "A");
    let titles: Vec<&str> = rows.iter().map(|r| r.album_title.as_str()).collect();
    assert_eq!(titles, vec!["X", "W"]);
}

#[test]
fn test_filters_partition_the_dataset() {
    let dataset = dataset();
    let artists = distinct_artists(&dataset);

    let total: usize = artists
        .iter()
        .map(|artist| filter_by_artist(&dataset, artist).len())
        .sum();
    assert_eq!(total, dataset.len());

    assert_eq!(filter_by_artists(&dataset, artists.as_slice()).len(), dataset.len());
}

#[test]
fn test_filter_is_exact_match() {
    let dataset = dataset();
    assert!(filter_by_artist(&dataset, "a").is_empty());
    assert!(filter_by_artist(&dataset, " A").is_empty());
    assert!(filter_by_artist(&dataset, "nobody").is_empty());
}

#[test]
fn test_multi_artist_filter() {
    let dataset = dataset();
    let rows = filter_by_artists(&dataset, &["C", "A"][..]);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.artist == "A" || r.artist == "C"));

    let none: [&str; 0] = [];
    assert!(filter_by_artists(&dataset, &none[..]).is_empty());
}

#[test]
fn test_distinct_artists_sorted() {
    assert_eq!(distinct_artists(&dataset()), vec!["A", "B", "C"]);
    assert!(distinct_artists(&Dataset::from_records(Vec::new())).is_empty());
}
