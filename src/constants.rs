//! Application-wide constants.
//!
//! Centralizes defaults and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Data Loading
// ============================================================================

/// Default dataset file, resolved relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "kpop_albums.csv";

/// Maximum dataset file size in MB
pub const MAX_CSV_SIZE_MB: usize = 100;

/// Number of leading lines inspected when sniffing the delimiter
pub const DELIMITER_SNIFF_LINES: usize = 5;

/// Column holding the artist name
pub const COL_ARTIST: &str = "artist";

/// Column holding the album title
pub const COL_ALBUM_TITLE: &str = "album_title";

/// Column holding the release date
pub const COL_RELEASE_DATE: &str = "release_date";

/// Column holding the sales count
pub const COL_SALES: &str = "sales";

// ============================================================================
// Server
// ============================================================================

/// Default bind address for the dashboard server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default port for the dashboard server
pub const DEFAULT_PORT: u16 = 8501;

/// Poll interval for the request loop in milliseconds
pub const SERVER_POLL_MS: u64 = 100;

// ============================================================================
// Presentation
// ============================================================================

/// Default page title
pub const DEFAULT_TITLE: &str = "Album Sales Dashboard";

/// Default display pattern for release dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default unit appended to grouped sales figures
pub const DEFAULT_SALES_SUFFIX: &str = " copies";

/// Minimum number of rivals before the comparison chart is shown
pub const MIN_RIVALS_FOR_COMPARISON: usize = 2;

/// Message shown in place of the comparison chart
pub const COMPARISON_PLACEHOLDER: &str =
    "Select two or more artists to compare their album sales over time.";

// ============================================================================
// Chart Layout
// ============================================================================

/// Chart width in SVG pixels
pub const CHART_WIDTH: u32 = 720;

/// Chart height in SVG pixels
pub const CHART_HEIGHT: u32 = 400;

/// Outer margin around the plotting area
pub const CHART_MARGIN: u32 = 16;

/// Width reserved for grouped y tick labels and the axis title
pub const CHART_Y_LABEL_AREA: u32 = 96;

/// Height below a bar chart, room for rotated album titles
pub const CHART_BAR_LABEL_AREA: u32 = 110;

/// Height below a line chart, room for date ticks
pub const CHART_DATE_LABEL_AREA: u32 = 52;

/// Maximum number of y-axis ticks
pub const CHART_Y_TICKS: usize = 6;

/// Maximum number of date ticks on the line chart
pub const CHART_DATE_TICKS: usize = 6;

/// Radius of line chart markers
pub const CHART_MARKER_RADIUS: u32 = 4;

/// Radius of the invisible hover target around each marker
pub const CHART_HOVER_RADIUS: u32 = 8;
