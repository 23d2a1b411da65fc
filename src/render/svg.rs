//! SVG chart rendering.
//!
//! Axes, gridlines, bars, lines, markers and the legend are drawn with
//! plotters' SVG backend into an in-memory string. Two things plotters
//! cannot express are appended afterwards as plain SVG, positioned with the
//! chart's own coordinate mapping:
//! - `<title>` hover tooltips on bars and markers
//! - album titles under the bars, rotated so long names stay readable

use super::escape_html;
use crate::constants::{
    CHART_BAR_LABEL_AREA, CHART_DATE_LABEL_AREA, CHART_DATE_TICKS, CHART_HEIGHT,
    CHART_HOVER_RADIUS, CHART_MARGIN, CHART_MARKER_RADIUS, CHART_WIDTH, CHART_Y_LABEL_AREA,
    CHART_Y_TICKS,
};
use crate::data::{BarChart, Hsla, LineChart};
use crate::data_table::format_thousands;
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use plotters::style::HSLColor;
use thiserror::Error;
use tracing::warn;

/// Fraction of each bar slot left empty on either side
const BAR_GAP: f64 = 0.15;

/// Headroom above the tallest value
const Y_HEADROOM: f64 = 1.1;

/// Errors that can occur while drawing a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

type ChartResult<T> = Result<T, ChartError>;

/// Plain SVG appended after plotters has finished
enum Overlay {
    /// Invisible hover target covering a bar
    Bar {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        tooltip: String,
    },
    /// Invisible hover target centred on a line marker
    Marker { cx: i32, cy: i32, tooltip: String },
    /// Rotated x-axis label
    Label { x: i32, y: i32, text: String },
}

impl Overlay {
    fn to_svg(&self) -> String {
        match self {
            Overlay::Bar {
                left,
                top,
                right,
                bottom,
                tooltip,
            } => format!(
                r#"<rect class="hover" x="{}" y="{}" width="{}" height="{}" fill="transparent"><title>{}</title></rect>"#,
                left,
                top,
                (right - left).max(1),
                (bottom - top).max(1),
                escape_html(tooltip),
            ),
            Overlay::Marker { cx, cy, tooltip } => format!(
                r#"<circle class="marker hover" cx="{}" cy="{}" r="{}" fill="transparent"><title>{}</title></circle>"#,
                cx,
                cy,
                CHART_HOVER_RADIUS,
                escape_html(tooltip),
            ),
            Overlay::Label { x, y, text } => format!(
                r#"<text class="x-label" x="{x}" y="{y}" text-anchor="end" transform="rotate(-35 {x} {y})">{}</text>"#,
                escape_html(text),
            ),
        }
    }
}

/// Top of the y-axis for a given maximum value
///
/// Computed in `f64`, so even `u64::MAX` yields a finite axis.
pub fn y_axis_top(max_value: u64) -> f64 {
    (max_value as f64 * Y_HEADROOM).max(1.0)
}

/// Grouped label for a y tick; ticks past `u64::MAX` saturate
fn y_tick_label(value: &f64) -> String {
    format_thousands(value.max(0.0).round() as u64)
}

fn plot_color(color: Hsla) -> HSLColor {
    HSLColor(color.h as f64, color.s as f64, color.l as f64)
}

/// Render a bar chart; one coloured bar per album, no legend
pub fn render_bar_chart(chart: &BarChart) -> String {
    draw_bar_chart(chart).unwrap_or_else(|e| chart_unavailable("bar", e))
}

/// Render a time-series line chart with markers, tooltips and a legend
pub fn render_line_chart(chart: &LineChart, sales_suffix: &str) -> String {
    draw_line_chart(chart, sales_suffix).unwrap_or_else(|e| chart_unavailable("line", e))
}

fn draw_bar_chart(chart: &BarChart) -> ChartResult<String> {
    let mut raw = String::new();
    let mut overlays = Vec::with_capacity(chart.bars.len() * 2);
    {
        let root = SVGBackend::with_string(&mut raw, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        let slots = chart.bars.len().max(1) as f64;
        let mut ctx = ChartBuilder::on(&root)
            .margin(CHART_MARGIN)
            .x_label_area_size(CHART_BAR_LABEL_AREA)
            .y_label_area_size(CHART_Y_LABEL_AREA)
            .build_cartesian_2d(0f64..slots, 0f64..y_axis_top(chart.max_value))
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        // Album titles are overlaid below, centred on each bar
        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(chart.bars.len() + 1)
            .x_label_formatter(&|_| String::new())
            .y_labels(CHART_Y_TICKS)
            .y_label_formatter(&y_tick_label)
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", 11))
            .axis_desc_style(("sans-serif", 12))
            .draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new(
                [(x + BAR_GAP, 0.0), (x + 1.0 - BAR_GAP, bar.value as f64)],
                plot_color(bar.color).filled(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

        for (i, bar) in chart.bars.iter().enumerate() {
            let x = i as f64;
            let (left, top) = ctx.backend_coord(&(x + BAR_GAP, bar.value as f64));
            let (right, bottom) = ctx.backend_coord(&(x + 1.0 - BAR_GAP, 0.0));
            overlays.push(Overlay::Bar {
                left,
                top,
                right,
                bottom,
                tooltip: format!("{}: {}", bar.label, format_thousands(bar.value)),
            });

            let (center, base) = ctx.backend_coord(&(x + 0.5, 0.0));
            overlays.push(Overlay::Label {
                x: center,
                y: base + 14,
                text: bar.label.clone(),
            });
        }

        root.present()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }
    Ok(finish_svg(&raw, "bar-chart", &overlays))
}

fn draw_line_chart(chart: &LineChart, sales_suffix: &str) -> ChartResult<String> {
    let (min_date, span_days) = match (chart.min_date, chart.max_date) {
        (Some(min), Some(max)) => (min, (max - min).num_days() as f64),
        _ => (NaiveDate::default(), 0.0),
    };
    // x is days since the earliest release, padded so edge markers stay inside
    let pad = (span_days * 0.05).max(15.0);
    let days = |date: NaiveDate| (date - min_date).num_days() as f64;
    let date_label = |value: &f64| {
        min_date
            .checked_add_signed(Duration::days(value.round() as i64))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    let mut raw = String::new();
    let mut overlays = Vec::new();
    {
        let root = SVGBackend::with_string(&mut raw, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        let mut ctx = ChartBuilder::on(&root)
            .margin(CHART_MARGIN)
            .x_label_area_size(CHART_DATE_LABEL_AREA)
            .y_label_area_size(CHART_Y_LABEL_AREA)
            .build_cartesian_2d(-pad..span_days + pad, 0f64..y_axis_top(chart.max_value))
            .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

        ctx.configure_mesh()
            .x_labels(CHART_DATE_TICKS)
            .x_label_formatter(&date_label)
            .y_labels(CHART_Y_TICKS)
            .y_label_formatter(&y_tick_label)
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", 11))
            .axis_desc_style(("sans-serif", 12))
            .draw()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

        for series in &chart.series {
            let color = series.color;
            let style = plot_color(color);
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|p| (days(p.release_date), p.value as f64))
                .collect();

            ctx.draw_series(LineSeries::new(points.iter().copied(), style.stroke_width(2)))
                .map_err(|e| ChartError::Drawing(e.to_string()))?
                .label(series.artist.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], plot_color(color).filled())
                });

            ctx.draw_series(
                points
                    .iter()
                    .map(|&coord| Circle::new(coord, CHART_MARKER_RADIUS, style.filled())),
            )
            .map_err(|e| ChartError::Drawing(e.to_string()))?;

            for (point, coord) in series.points.iter().zip(&points) {
                let (cx, cy) = ctx.backend_coord(coord);
                overlays.push(Overlay::Marker {
                    cx,
                    cy,
                    tooltip: format!(
                        "{} - {} ({}): {}{}",
                        point.album_title,
                        series.artist,
                        point.release_date.format("%Y-%m-%d"),
                        format_thousands(point.value),
                        sales_suffix,
                    ),
                });
            }
        }

        if !chart.series.is_empty() {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(&WHITE.mix(0.85))
                .border_style(&BLACK)
                .label_font(("sans-serif", 11))
                .draw()
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
        }

        root.present()
            .map_err(|e| ChartError::Drawing(e.to_string()))?;
    }
    Ok(finish_svg(&raw, "line-chart", &overlays))
}

/// Tag the plotters document with a CSS class and append the overlays
fn finish_svg(raw: &str, class: &str, overlays: &[Overlay]) -> String {
    let mut svg = raw.replacen("<svg ", &format!(r#"<svg class="{}" role="img" "#, class), 1);
    let extra: String = overlays.iter().map(Overlay::to_svg).collect();
    match svg.rfind("</svg>") {
        Some(end) => svg.insert_str(end, &extra),
        None => {
            svg.push_str(&extra);
            svg.push_str("</svg>");
        }
    }
    svg
}

fn chart_unavailable(kind: &str, err: ChartError) -> String {
    warn!("Could not draw {} chart: {}", kind, err);
    format!(
        r#"<p class="info-message">The {} chart could not be drawn.</p>"#,
        kind
    )
}
