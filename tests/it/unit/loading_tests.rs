//! Unit tests for dataset loading and the memoizing cache.

use crate::helpers::{SMALL_CSV, write_fixture, ymd};
use album_dashboard::data::{self, DataError, DatasetCache, load_dataset};
use std::path::Path;
use std::sync::Arc;

#[test]
fn test_load_small_csv() {
    let (_dir, path) = write_fixture("albums.csv", SMALL_CSV);
    let dataset = load_dataset(&path).expect("load");

    assert_eq!(dataset.len(), 3);
    let first = &dataset.records()[0];
    assert_eq!(first.artist, "A");
    assert_eq!(first.album_title, "X");
    assert_eq!(first.release_date, ymd(2020, 1, 1));
    assert_eq!(first.sales, 1000);
}

#[test]
fn test_load_tsv_by_extension() {
    let contents = "artist\talbum_title\trelease_date\tsales\nA\tX, Deluxe\t2020-01-01\t1,200\n";
    let (_dir, path) = write_fixture("albums.tsv", contents);
    let dataset = load_dataset(&path).expect("load");

    assert_eq!(dataset.records()[0].album_title, "X, Deluxe");
    assert_eq!(dataset.records()[0].sales, 1200);
}

#[test]
fn test_header_only_file_is_empty_dataset() {
    let (_dir, path) = write_fixture("albums.csv", "artist,album_title,release_date,sales\n");
    let dataset = load_dataset(&path).expect("load");
    assert!(dataset.is_empty());
}

#[test]
fn test_missing_file() {
    let err = load_dataset(Path::new("/nonexistent/albums.csv")).unwrap_err();
    assert!(matches!(err, DataError::NotFound { .. }));
    assert_eq!(err.kind(), "NotFoundError");
}

#[test]
fn test_missing_column_is_schema_error() {
    let (_dir, path) = write_fixture("albums.csv", "artist,album_title,sales\nA,X,10\n");
    let err = load_dataset(&path).unwrap_err();

    assert_eq!(err.kind(), "SchemaError");
    match err {
        DataError::MissingColumn { column } => assert_eq!(column, "release_date"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_date_is_parse_error() {
    let contents = "artist,album_title,release_date,sales\nA,X,2020-01-01,10\nB,Y,someday,20\n";
    let (_dir, path) = write_fixture("albums.csv", contents);
    let err = load_dataset(&path).unwrap_err();

    assert_eq!(err.kind(), "ParseError");
    match err {
        DataError::Parse { row, column, value, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "release_date");
            assert_eq!(value, "someday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_sales_is_parse_error() {
    let contents = "artist,album_title,release_date,sales\nA,X,2020-01-01,lots\n";
    let (_dir, path) = write_fixture("albums.csv", contents);
    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, DataError::Parse { ref column, .. } if column == "sales"));
}

#[test]
fn test_cache_reads_file_once() {
    let (_dir, path) = write_fixture("albums.csv", SMALL_CSV);
    let cache = DatasetCache::new();

    let first = cache.load(&path).expect("first load");
    let second = cache.load(&path).expect("second load");

    assert_eq!(cache.load_count(), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_cache_keys_by_path() {
    let (_dir_a, path_a) = write_fixture("a.csv", SMALL_CSV);
    let (_dir_b, path_b) = write_fixture("b.csv", SMALL_CSV);
    let cache = DatasetCache::new();

    cache.load(&path_a).expect("load a");
    cache.load(&path_b).expect("load b");
    cache.load(&path_a).expect("load a again");

    assert_eq!(cache.load_count(), 2);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_invalidate_rereads() {
    let (_dir, path) = write_fixture("albums.csv", SMALL_CSV);
    let cache = DatasetCache::new();

    cache.load(&path).expect("load");
    std::fs::write(&path, "artist,album_title,release_date,sales\nZ,Q,2022-02-02,5\n")
        .expect("rewrite fixture");

    // Still the memoized copy
    assert_eq!(cache.load(&path).expect("cached").len(), 3);

    assert!(cache.invalidate(&path));
    let reloaded = cache.load(&path).expect("reload");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(cache.load_count(), 2);
}

#[test]
fn test_global_load_is_memoized() {
    let (_dir, path) = write_fixture("memoized.csv", SMALL_CSV);

    let first = data::load(&path).expect("first load");
    // The file is gone, so only the cache can answer
    std::fs::remove_file(&path).unwrap();
    let second = data::load(&path).expect("cached load");
    assert!(Arc::ptr_eq(&first, &second));

    assert!(data::invalidate(&path));
    let err = data::load(&path).unwrap_err();
    assert_eq!(err.kind(), "NotFoundError");
}

#[test]
fn test_global_load_counts_file_reads() {
    let (_dir, path) = write_fixture("counted.csv", SMALL_CSV);

    let before = data::load_count();
    data::load(&path).expect("load");
    data::load(&path).expect("load");
    assert!(data::load_count() > before);
    assert!(data::cached(&path).is_some());

    assert!(data::invalidate(&path));
    assert!(data::cached(&path).is_none());
}

#[test]
fn test_short_row_is_schema_error() {
    let (_dir, path) = write_fixture(
        "albums.csv",
        "artist,album_title,release_date,sales\nA,X,2020-01-01,1\nB,Y\n",
    );
    let err = load_dataset(&path).unwrap_err();

    assert_eq!(err.kind(), "SchemaError");
    match err {
        DataError::Schema { row, message } => {
            assert_eq!(row, 2);
            assert_eq!(message, "expected 4 fields, found 2");
        }
        other => panic!("unexpected error: {other}"),
    }
}
