//! HTML and SVG rendering for the dashboard page.

mod page;
mod svg;

pub use page::{render_error_page, render_page};
pub use svg::{ChartError, render_bar_chart, render_line_chart, y_axis_top};

/// HTML-escape a string for element content and attribute values
///
/// Escapes: & < > " '
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
