//! Full dashboard page composition.
//!
//! Layout: title header, sidebar artist selector, info table and bar chart
//! for the primary artist, rival multi-select with the comparison chart or
//! a placeholder, and a collapsible panel holding the full dataset.
//! Both selectors live in one GET form so every change round-trips the
//! whole selection through the query string.

use super::escape_html;
use super::svg::{render_bar_chart, render_line_chart};
use crate::app::{ComparisonView, DashboardView};
use crate::data_table::TableView;

const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2430; background: #fafbfc; }
form { display: flex; min-height: 100vh; }
aside { width: 260px; padding: 24px 16px; background: #f0f2f6; flex-shrink: 0; }
aside select { width: 100%; padding: 6px; }
main { flex: 1; padding: 24px 40px; max-width: 1400px; }
.columns { display: flex; gap: 24px; align-items: flex-start; }
.columns .info { flex: 1; min-width: 0; }
.columns .chart { flex: 2; min-width: 0; }
table { border-collapse: collapse; width: 100%; font-size: 14px; }
th, td { padding: 6px 10px; border-bottom: 1px solid #e3e6ec; text-align: left; }
th { background: #f0f2f6; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
.info-message { padding: 12px 16px; border-radius: 6px; background: #e8f1fb; color: #1c4f86; }
.error { padding: 16px; border-radius: 6px; background: #fdecea; color: #8a1c12; }
select[multiple] { min-width: 260px; }
svg { max-width: 100%; height: auto; }
svg .x-label { font-family: sans-serif; font-size: 11px; fill: #4a5060; }
svg .hover:hover { fill: rgba(31, 36, 48, 0.12); }
details { margin-top: 24px; }
summary { cursor: pointer; font-weight: 600; }
"#;

/// Render the dashboard page
pub fn render_page(view: &DashboardView) -> String {
    let mut html = open_document(&view.title);
    html.push_str(r#"<form method="get" action="/">"#);

    // Sidebar
    html.push_str(r#"<aside><h2>Choose an artist</h2><label for="artist">Artist to explore</label>"#);
    html.push_str(r#"<select id="artist" name="artist" onchange="this.form.submit()">"#);
    for artist in &view.artists {
        let selected = view.selection.artist.as_deref() == Some(artist.as_str());
        push_option(&mut html, artist, selected);
    }
    html.push_str("</select></aside>");

    // Main area
    html.push_str(&format!(
        "<main><header><h1>{}</h1><p>Pick an artist in the sidebar, then compare rivals below.</p></header><hr>",
        escape_html(&view.title)
    ));

    match &view.primary {
        Some(primary) => {
            let artist = escape_html(&primary.artist);
            html.push_str(&format!(
                r#"<section class="primary"><h2>{} album sales</h2><div class="columns"><div class="info"><h3>Album info</h3>{}</div><div class="chart"><h3>Sales by album</h3>{}</div></div></section>"#,
                artist,
                render_table_html(&primary.table),
                render_bar_chart(&primary.chart),
            ));
        }
        None => html.push_str(r#"<p class="info-message">The dataset has no albums.</p>"#),
    }

    html.push_str("<hr>");
    html.push_str(r#"<section class="comparison"><h2>Rival comparison</h2>"#);
    html.push_str(r#"<label for="rival">Choose two or more artists to compare</label><br>"#);
    let size = view.artists.len().clamp(2, 8);
    html.push_str(&format!(r#"<select id="rival" name="rival" multiple size="{}">"#, size));
    for artist in &view.artists {
        let selected = view.selection.rivals.iter().any(|r| r == artist);
        push_option(&mut html, artist, selected);
    }
    html.push_str(r#"</select> <button type="submit">Compare</button>"#);

    match &view.comparison {
        ComparisonView::Shown { chart, .. } => {
            html.push_str(&format!(
                "<h3>Sales over time by release date</h3>{}",
                render_line_chart(chart, &view.sales_suffix)
            ));
        }
        ComparisonView::Hidden { message } => {
            html.push_str(&format!(
                r#"<p class="info-message">{}</p>"#,
                escape_html(message)
            ));
        }
    }
    html.push_str("</section>");

    html.push_str(&format!(
        "<details><summary>Show full dataset ({} albums)</summary>{}</details>",
        view.full_table.row_count(),
        render_table_html(&view.full_table)
    ));

    html.push_str("</main></form></body></html>");
    html
}

/// Render the startup failure page shown when the dataset cannot load
pub fn render_error_page(title: &str, kind: &str, message: &str) -> String {
    let mut html = open_document(title);
    html.push_str(&format!(
        r#"<main><h1>{}</h1><div class="error"><strong>{}</strong><p>{}</p><p>Fix the dataset file and restart the dashboard.</p></div></main></body></html>"#,
        escape_html(title),
        escape_html(kind),
        escape_html(message),
    ));
    html
}

/// Render a table view as an HTML table
pub fn render_table_html(table: &TableView) -> String {
    let mut html = String::from("<table><thead><tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let class = if looks_numeric(cell) { r#" class="num""# } else { "" };
            html.push_str(&format!("<td{}>{}</td>", class, escape_html(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn open_document(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><style>{}</style></head><body>"#,
        escape_html(title),
        STYLE
    )
}

fn push_option(html: &mut String, value: &str, selected: bool) {
    let value = escape_html(value);
    html.push_str(&format!(
        r#"<option value="{}"{}>{}</option>"#,
        value,
        if selected { " selected" } else { "" },
        value
    ));
}

/// Right-align cells that start with a digit (grouped sales)
fn looks_numeric(cell: &str) -> bool {
    cell.chars().next().is_some_and(|c| c.is_ascii_digit()) && !cell.contains('-')
}
