use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TimeSeriesPoint
// ---------------------------------------------------------------------------

/// A single (x, y) business data point, e.g. days-before-arrival vs. price.
///
/// Sequences are sorted ascending by `x` before rendering; duplicate `x`
/// values are allowed and kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TimeSeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl TimeSeriesPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// DataOrigin — live vs. synthetic tagging
// ---------------------------------------------------------------------------

/// Where a series came from.
///
/// Synthetic (mock/fallback) data must stay distinguishable from live API
/// data all the way to the UI binding, so users are never shown fabricated
/// figures as if they were authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Synthetic,
}

impl DataOrigin {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, DataOrigin::Synthetic)
    }
}

// ---------------------------------------------------------------------------
// PriceSeries — ordered price history with origin tag
// ---------------------------------------------------------------------------

/// An ordered price history plus its origin tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    pub points: Vec<TimeSeriesPoint>,
    pub origin: DataOrigin,
}

impl PriceSeries {
    pub fn live(points: Vec<TimeSeriesPoint>) -> Self {
        Self { points, origin: DataOrigin::Live }
    }

    pub fn synthetic(points: Vec<TimeSeriesPoint>) -> Self {
        Self { points, origin: DataOrigin::Synthetic }
    }

    /// The y values in point order, as fed to the trend estimator.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}
