//! Chart coordinate mapping for dashboard price charts.
//!
//! Transforms (x, y) business data points into screen-space geometry for
//! SVG/canvas rendering: an affine data-to-pixel mapping (Y inverted, since
//! screen Y grows downward), line and area-fill path strings, and evenly
//! spaced gridlines with display labels. The layout is a pure function of
//! the input series and viewport; any change to either regenerates the
//! whole geometry, there is no incremental update or hidden state.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::TimeSeriesPoint;

// ---------------------------------------------------------------------------
// Padding / Viewport
// ---------------------------------------------------------------------------

/// Pixel padding between the viewport edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        // Room for Y labels on the left and X labels underneath.
        Self { top: 20.0, right: 20.0, bottom: 30.0, left: 50.0 }
    }
}

/// The drawable surface: overall pixel dimensions plus padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, padding: Padding::default() }
    }

    /// Plot-area width, floored at 1 pixel so degenerate viewports never
    /// produce a zero or negative span.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.padding.left - self.padding.right).max(1.0)
    }

    /// Plot-area height, floored at 1 pixel.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.padding.top - self.padding.bottom).max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

// ---------------------------------------------------------------------------
// ScreenPoint / AxisTick
// ---------------------------------------------------------------------------

/// A data point mapped into pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// One gridline: its pixel position along the relevant axis, the data value
/// it represents, and the rounded display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub value: f64,
    pub label: String,
}

// ---------------------------------------------------------------------------
// ChartLayout
// ---------------------------------------------------------------------------

/// Complete screen-space geometry for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub viewport: Viewport,
    /// Data domain after sorting; Y bounds widened by
    /// [`config::Y_DOMAIN_MARGIN`] so the curve does not touch the frame.
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Input points sorted ascending by x and mapped to pixels.
    pub points: Vec<ScreenPoint>,
    /// SVG polyline path (`M x y L x y ...`) connecting the points.
    pub line_path: String,
    /// Closed fill path: the polyline plus two points dropped to the plot's
    /// bottom edge, for gradient-fill rendering.
    pub area_path: String,
    /// Horizontal gridlines with Y-axis labels.
    pub horizontal_gridlines: Vec<AxisTick>,
    /// Vertical gridlines with X-axis labels.
    pub vertical_gridlines: Vec<AxisTick>,
}

impl ChartLayout {
    /// Map a data x value into pixel space.
    pub fn screen_x(&self, x: f64) -> f64 {
        let span = span_or_one(self.x_min, self.x_max);
        self.viewport.padding.left + (x - self.x_min) / span * self.viewport.plot_width()
    }

    /// Map a data y value into pixel space (inverted: larger values are
    /// higher on screen, i.e. smaller pixel y).
    pub fn screen_y(&self, y: f64) -> f64 {
        let span = span_or_one(self.y_min, self.y_max);
        let normalized = (y - self.y_min) / span;
        self.viewport.padding.top + (1.0 - normalized) * self.viewport.plot_height()
    }

    /// Inverse of [`screen_x`](Self::screen_x).
    pub fn data_x(&self, screen_x: f64) -> f64 {
        let span = span_or_one(self.x_min, self.x_max);
        self.x_min + (screen_x - self.viewport.padding.left) / self.viewport.plot_width() * span
    }

    /// Inverse of [`screen_y`](Self::screen_y).
    pub fn data_y(&self, screen_y: f64) -> f64 {
        let span = span_or_one(self.y_min, self.y_max);
        let normalized = 1.0 - (screen_y - self.viewport.padding.top) / self.viewport.plot_height();
        self.y_min + normalized * span
    }
}

// ---------------------------------------------------------------------------
// layout_chart
// ---------------------------------------------------------------------------

/// Lay out a series of data points inside a viewport.
///
/// Input order is not assumed; points are sorted ascending by x first, with
/// duplicate x values kept. Degenerate inputs never divide by zero: a
/// zero-range axis has its denominator clamped to 1, collapsing that axis to
/// a single pixel position. An empty series yields an empty layout with
/// empty paths and no gridlines.
pub fn layout_chart(points: &[TimeSeriesPoint], viewport: &Viewport) -> ChartLayout {
    let mut sorted: Vec<TimeSeriesPoint> = points.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let mut layout = ChartLayout {
        viewport: *viewport,
        x_min: 0.0,
        x_max: 0.0,
        y_min: 0.0,
        y_max: 0.0,
        points: Vec::new(),
        line_path: String::new(),
        area_path: String::new(),
        horizontal_gridlines: Vec::new(),
        vertical_gridlines: Vec::new(),
    };

    if sorted.is_empty() {
        return layout;
    }

    layout.x_min = sorted.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    layout.x_max = sorted.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let y_lo = sorted.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_hi = sorted.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    // Widen the Y domain so the curve stays off the frame edges.
    layout.y_min = y_lo * (1.0 - config::Y_DOMAIN_MARGIN);
    layout.y_max = y_hi * (1.0 + config::Y_DOMAIN_MARGIN);

    let screen_points: Vec<ScreenPoint> = sorted
        .iter()
        .map(|p| ScreenPoint { x: layout.screen_x(p.x), y: layout.screen_y(p.y) })
        .collect();
    layout.line_path = line_path(&screen_points);
    layout.area_path = area_path(&screen_points, viewport);
    layout.points = screen_points;

    let h_gridlines = horizontal_gridlines(&layout);
    let v_gridlines = vertical_gridlines(&layout);
    layout.horizontal_gridlines = h_gridlines;
    layout.vertical_gridlines = v_gridlines;

    layout
}

// ---------------------------------------------------------------------------
// Path construction
// ---------------------------------------------------------------------------

fn line_path(points: &[ScreenPoint]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{} {:.2} {:.2}", cmd, p.x, p.y));
    }
    path
}

fn area_path(points: &[ScreenPoint], viewport: &Viewport) -> String {
    if points.is_empty() {
        return String::new();
    }
    let bottom = viewport.padding.top + viewport.plot_height();
    let first = points[0];
    let last = points[points.len() - 1];

    let mut path = line_path(points);
    path.push_str(&format!(
        " L {:.2} {:.2} L {:.2} {:.2} Z",
        last.x, bottom, first.x, bottom
    ));
    path
}

// ---------------------------------------------------------------------------
// Gridlines
// ---------------------------------------------------------------------------

fn horizontal_gridlines(layout: &ChartLayout) -> Vec<AxisTick> {
    let count = config::HORIZONTAL_GRIDLINES;
    let span = layout.y_max - layout.y_min;
    (0..count)
        .map(|i| {
            let fraction = i as f64 / (count - 1) as f64;
            let value = layout.y_min + span * fraction;
            AxisTick {
                position: layout.screen_y(value),
                value,
                label: format_label(value),
            }
        })
        .collect()
}

fn vertical_gridlines(layout: &ChartLayout) -> Vec<AxisTick> {
    let count = config::VERTICAL_GRIDLINES;
    let span = layout.x_max - layout.x_min;
    (0..count)
        .map(|i| {
            let fraction = i as f64 / (count - 1) as f64;
            let value = layout.x_min + span * fraction;
            AxisTick {
                position: layout.screen_x(value),
                value,
                label: format_label(value),
            }
        })
        .collect()
}

/// Round a tick value for display: whole units at 100 and above, one
/// decimal below.
fn format_label(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn span_or_one(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        1.0
    } else {
        span
    }
}
