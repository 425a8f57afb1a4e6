//! Unit tests for the chart coordinate mapper.

use medici_analytics::chart::{layout_chart, Padding, Viewport};
use medici_analytics::config;
use medici_analytics::models::TimeSeriesPoint;

const EPS: f64 = 1e-9;

fn viewport() -> Viewport {
    Viewport::new(800.0, 400.0)
}

fn points(data: &[(f64, f64)]) -> Vec<TimeSeriesPoint> {
    data.iter().map(|&(x, y)| TimeSeriesPoint::new(x, y)).collect()
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn empty_series_yields_empty_layout() {
    let layout = layout_chart(&[], &viewport());
    assert!(layout.points.is_empty());
    assert!(layout.line_path.is_empty());
    assert!(layout.area_path.is_empty());
    assert!(layout.horizontal_gridlines.is_empty());
    assert!(layout.vertical_gridlines.is_empty());
}

#[test]
fn single_point_is_deterministic() {
    let vp = viewport();
    let layout = layout_chart(&points(&[(5.0, 100.0)]), &vp);

    assert_eq!(layout.points.len(), 1);
    // Zero x-range collapses to the left edge of the plot area.
    assert!((layout.points[0].x - vp.padding.left).abs() < EPS);
    // The widened y-domain (90..110) centers the point vertically.
    let center = vp.padding.top + vp.plot_height() / 2.0;
    assert!((layout.points[0].y - center).abs() < EPS);

    // Recomputing yields the exact same layout.
    assert_eq!(layout, layout_chart(&points(&[(5.0, 100.0)]), &vp));
}

#[test]
fn constant_series_does_not_divide_by_zero() {
    let layout = layout_chart(&points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]), &viewport());
    for p in &layout.points {
        assert!(p.x.is_finite());
        assert!(p.y.is_finite());
    }
}

// ---------------------------------------------------------------------------
// Sorting and domain
// ---------------------------------------------------------------------------

#[test]
fn input_order_is_not_assumed() {
    let layout = layout_chart(&points(&[(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]), &viewport());
    for pair in layout.points.windows(2) {
        assert!(pair[0].x <= pair[1].x);
    }
    assert_eq!(layout.x_min, 1.0);
    assert_eq!(layout.x_max, 3.0);
}

#[test]
fn duplicate_x_values_are_kept() {
    let layout = layout_chart(&points(&[(1.0, 10.0), (1.0, 20.0), (2.0, 15.0)]), &viewport());
    assert_eq!(layout.points.len(), 3);
}

#[test]
fn y_domain_is_widened_ten_percent() {
    let layout = layout_chart(&points(&[(0.0, 100.0), (1.0, 200.0)]), &viewport());
    assert!((layout.y_min - 90.0).abs() < EPS);
    assert!((layout.y_max - 220.0).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Affine mapping
// ---------------------------------------------------------------------------

#[test]
fn domain_extremes_map_to_plot_edges() {
    let vp = viewport();
    let layout = layout_chart(&points(&[(0.0, 50.0), (10.0, 150.0)]), &vp);

    assert!((layout.screen_x(layout.x_min) - vp.padding.left).abs() < EPS);
    assert!((layout.screen_x(layout.x_max) - (vp.padding.left + vp.plot_width())).abs() < EPS);
    // Y is inverted: the max value sits at the top of the plot area.
    assert!((layout.screen_y(layout.y_max) - vp.padding.top).abs() < EPS);
    assert!((layout.screen_y(layout.y_min) - (vp.padding.top + vp.plot_height())).abs() < EPS);
}

#[test]
fn inverse_mapping_round_trips() {
    let layout = layout_chart(&points(&[(2.0, 80.0), (8.0, 120.0), (5.0, 95.0)]), &viewport());

    for value in [layout.x_min, layout.x_max, 4.5] {
        assert!((layout.data_x(layout.screen_x(value)) - value).abs() < 1e-6);
    }
    for value in [layout.y_min, layout.y_max, 100.0] {
        assert!((layout.data_y(layout.screen_y(value)) - value).abs() < 1e-6);
    }
}

// ---------------------------------------------------------------------------
// Paths and gridlines
// ---------------------------------------------------------------------------

#[test]
fn line_path_connects_all_points() {
    let layout = layout_chart(&points(&[(0.0, 10.0), (1.0, 20.0), (2.0, 15.0)]), &viewport());
    assert!(layout.line_path.starts_with("M "));
    assert_eq!(layout.line_path.matches('L').count(), 2);
}

#[test]
fn area_path_closes_to_the_plot_bottom() {
    let vp = viewport();
    let layout = layout_chart(&points(&[(0.0, 10.0), (1.0, 20.0)]), &vp);
    assert!(layout.area_path.starts_with(&layout.line_path));
    assert!(layout.area_path.ends_with('Z'));
    // Two extra drop-down points beyond the polyline.
    assert_eq!(
        layout.area_path.matches('L').count(),
        layout.line_path.matches('L').count() + 2
    );
}

#[test]
fn gridline_counts_are_fixed() {
    let layout = layout_chart(&points(&[(0.0, 10.0), (9.0, 90.0)]), &viewport());
    assert_eq!(layout.horizontal_gridlines.len(), config::HORIZONTAL_GRIDLINES);
    assert_eq!(layout.vertical_gridlines.len(), config::VERTICAL_GRIDLINES);
}

#[test]
fn gridlines_span_the_value_range_evenly() {
    let layout = layout_chart(&points(&[(0.0, 100.0), (10.0, 200.0)]), &viewport());

    let first = &layout.horizontal_gridlines[0];
    let last = layout.horizontal_gridlines.last().unwrap();
    assert!((first.value - layout.y_min).abs() < EPS);
    assert!((last.value - layout.y_max).abs() < EPS);

    let step = layout.horizontal_gridlines[1].value - first.value;
    for pair in layout.horizontal_gridlines.windows(2) {
        assert!(((pair[1].value - pair[0].value) - step).abs() < 1e-6);
    }
}

#[test]
fn labels_are_rounded_for_display() {
    let layout = layout_chart(&points(&[(0.0, 100.0), (10.0, 200.0)]), &viewport());
    // y domain 90..220, all >= 100 except the first; spot-check formatting.
    assert_eq!(layout.horizontal_gridlines[0].label, "90.0");
    assert_eq!(layout.horizontal_gridlines.last().unwrap().label, "220");
}

// ---------------------------------------------------------------------------
// Viewport handling
// ---------------------------------------------------------------------------

#[test]
fn tiny_viewport_never_collapses_plot_area() {
    let vp = Viewport {
        width: 10.0,
        height: 10.0,
        padding: Padding { top: 20.0, right: 20.0, bottom: 20.0, left: 20.0 },
    };
    assert_eq!(vp.plot_width(), 1.0);
    assert_eq!(vp.plot_height(), 1.0);
    let layout = layout_chart(&points(&[(0.0, 1.0), (1.0, 2.0)]), &vp);
    for p in &layout.points {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}

#[test]
fn viewport_change_regenerates_geometry() {
    let data = points(&[(0.0, 10.0), (1.0, 20.0)]);
    let a = layout_chart(&data, &Viewport::new(800.0, 400.0));
    let b = layout_chart(&data, &Viewport::new(400.0, 200.0));
    assert_ne!(a.points, b.points);
    assert_ne!(a.line_path, b.line_path);
}
