//! Price trend/elasticity estimation.
//!
//! Ordinary least-squares slope over a price series, normalized by the mean
//! price so results are comparable across price magnitudes. The slope is a
//! directional signal only, not a forecast; the multiplicative seasonal
//! factor is applied to predicted prices independently and the two signals
//! are combined only in the human-readable recommendation string, never
//! blended numerically.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{DataOrigin, PriceSeries};

// ---------------------------------------------------------------------------
// estimate_trend
// ---------------------------------------------------------------------------

/// Normalized OLS slope of `values` against their index.
///
/// Uses the closed-form sums (`Σi`, `Σy`, `Σiy`, `Σi²`) for a deterministic
/// O(n) computation. Fewer than 2 points returns `0.0` (stable/neutral), as
/// does a series whose mean is zero.
pub fn estimate_trend(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let n_f = n as f64;
    let sum_i: f64 = (0..n).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_iy: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_i2: f64 = (0..n).map(|i| (i as f64) * (i as f64)).sum();

    let denominator = n_f * sum_i2 - sum_i * sum_i;
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }
    let slope = (n_f * sum_iy - sum_i * sum_y) / denominator;

    let mean = sum_y / n_f;
    if mean.abs() < f64::EPSILON {
        return 0.0;
    }
    slope / mean
}

// ---------------------------------------------------------------------------
// TrendDirection
// ---------------------------------------------------------------------------

/// Directional classification of a normalized slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Classify against the fixed thresholds in [`config`]
    /// ([`config::TREND_UP_THRESHOLD`] / [`config::TREND_DOWN_THRESHOLD`]).
    pub fn classify(normalized_slope: f64) -> Self {
        Self::classify_with(
            normalized_slope,
            config::TREND_UP_THRESHOLD,
            config::TREND_DOWN_THRESHOLD,
        )
    }

    /// Classify against caller-supplied thresholds.
    pub fn classify_with(normalized_slope: f64, up: f64, down: f64) -> Self {
        if normalized_slope > up {
            TrendDirection::Up
        } else if normalized_slope < down {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }
}

// ---------------------------------------------------------------------------
// Seasonal factor
// ---------------------------------------------------------------------------

/// Seasonal price factor for the month of `date`.
///
/// Thin wrapper over [`config::seasonal_multiplier`], keyed by calendar
/// month only.
pub fn seasonal_factor(date: NaiveDate) -> f64 {
    config::seasonal_multiplier(date.month())
}

// ---------------------------------------------------------------------------
// TrendReport — combined directional signal + heuristic prediction
// ---------------------------------------------------------------------------

/// Trend analysis of a price series, including the client-side heuristic
/// price prediction used when the backend predictor is unavailable.
///
/// The prediction is always tagged [`DataOrigin::Synthetic`]: it is an
/// illustrative extrapolation, never an authoritative forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub normalized_slope: f64,
    pub direction: TrendDirection,
    pub seasonal_factor: f64,
    /// Last observed price extrapolated by the slope over the horizon, then
    /// seasonally adjusted. `None` for an empty series.
    pub predicted_price: Option<f64>,
    pub prediction_origin: DataOrigin,
    pub recommendation: String,
}

/// Analyze a price series: slope, direction, seasonal factor for the target
/// month, and a heuristic predicted price `horizon` steps ahead.
pub fn analyze(series: &PriceSeries, horizon: u32, target_month: u32) -> TrendReport {
    let values = series.values();
    let normalized_slope = estimate_trend(&values);
    let direction = TrendDirection::classify(normalized_slope);
    let seasonal = config::seasonal_multiplier(target_month);

    let predicted_price = values
        .last()
        .map(|&last| last * (1.0 + normalized_slope * horizon as f64) * seasonal);

    TrendReport {
        normalized_slope,
        direction,
        seasonal_factor: seasonal,
        predicted_price,
        prediction_origin: DataOrigin::Synthetic,
        recommendation: recommendation_text(direction, seasonal),
    }
}

/// Combine trend direction and seasonal factor into the advisory string
/// shown next to the prediction. This is the only place the two signals
/// meet.
fn recommendation_text(direction: TrendDirection, seasonal: f64) -> String {
    let season = if seasonal > 1.0 {
        "high season supports firmer pricing"
    } else if seasonal < 1.0 {
        "low season argues for caution on price"
    } else {
        "neutral season"
    };
    match direction {
        TrendDirection::Up => format!("prices trending up; {}", season),
        TrendDirection::Down => format!("prices trending down; {}", season),
        TrendDirection::Stable => format!("prices stable; {}", season),
    }
}
