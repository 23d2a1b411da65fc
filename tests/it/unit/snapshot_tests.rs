//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the JSON shape of the serialisable view state.
//! To update them after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestDatasetBuilder;
use album_dashboard::app::{Dashboard, SelectionQuery, ViewOptions};
use album_dashboard::settings::Settings;
use std::sync::Arc;

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "data_path": "kpop_albums.csv",
      "bind_address": "127.0.0.1",
      "port": 8501,
      "open_browser": true,
      "title": "Album Sales Dashboard",
      "date_format": "%Y-%m-%d",
      "sales_suffix": " copies"
    }
    "#);
}

#[test]
fn snapshot_primary_table_and_hidden_comparison() {
    let dataset = TestDatasetBuilder::new()
        .album("A", "X", (2020, 1, 1), 1000)
        .album("B", "Y", (2021, 6, 15), 2500)
        .build();
    let mut dashboard = Dashboard::new(Arc::new(dataset), ViewOptions::default());
    dashboard.apply_query(&SelectionQuery::from_url("/?artist=B&rival=A"));

    insta::assert_json_snapshot!(dashboard.selection(), @r#"
    {
      "artist": "B",
      "rivals": [
        "A"
      ]
    }
    "#);
    insta::assert_json_snapshot!(dashboard.primary().unwrap().table, @r#"
    {
      "headers": [
        "Release Date",
        "Album Title",
        "Sales"
      ],
      "rows": [
        [
          "2021-06-15",
          "Y",
          "2,500 copies"
        ]
      ]
    }
    "#);
    insta::assert_json_snapshot!(dashboard.comparison(), @r#"
    {
      "state": "hidden",
      "message": "Select two or more artists to compare their album sales over time."
    }
    "#);
}
