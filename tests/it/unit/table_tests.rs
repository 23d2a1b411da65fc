//! Unit tests for table rendering and cell formatting.

use crate::helpers::TestDatasetBuilder;
use album_dashboard::data_table::{TableSpec, format_thousands, render_table};
use album_dashboard::types::AlbumRecord;

#[test]
fn test_album_info_table() {
    let dataset = TestDatasetBuilder::new()
        .album("A", "Later", (2021, 2, 2), 1234567)
        .album("A", "Earlier", (2019, 9, 9), 42)
        .build();
    let rows: Vec<&AlbumRecord> = dataset.iter().collect();
    let table = render_table(&rows, &TableSpec::album_info("%Y-%m-%d", " copies"));

    assert_eq!(table.headers, vec!["Release Date", "Album Title", "Sales"]);
    assert_eq!(
        table.rows,
        vec![
            vec!["2019-09-09", "Earlier", "42 copies"],
            vec!["2021-02-02", "Later", "1,234,567 copies"],
        ]
    );
}

#[test]
fn test_sort_is_stable_and_idempotent() {
    let dataset = TestDatasetBuilder::new()
        .album("A", "First", (2020, 1, 1), 1)
        .album("A", "Second", (2020, 1, 1), 2)
        .album("A", "Oldest", (2010, 1, 1), 3)
        .build();
    let spec = TableSpec::album_info("%Y-%m-%d", "");

    let rows: Vec<&AlbumRecord> = dataset.iter().collect();
    let once = render_table(&rows, &spec);
    let titles: Vec<&str> = once.rows.iter().map(|r| r[1].as_str()).collect();
    assert_eq!(titles, vec!["Oldest", "First", "Second"]);

    let mut sorted = rows.clone();
    sorted.sort_by_key(|r| r.release_date);
    assert_eq!(render_table(&sorted, &spec), once);
}

#[test]
fn test_empty_rows_keep_headers() {
    let table = render_table(&[], &TableSpec::album_info("%Y-%m-%d", " copies"));
    assert!(table.is_empty());
    assert_eq!(table.headers.len(), 3);
}

#[test]
fn test_formatting_preserves_sales_value() {
    for value in [0u64, 7, 999, 1000, 65_536, 1_000_000, u64::MAX] {
        let formatted = format_thousands(value);
        let digits: String = formatted.chars().filter(|c| *c != ',').collect();
        assert_eq!(digits.parse::<u64>().unwrap(), value);
    }
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}
