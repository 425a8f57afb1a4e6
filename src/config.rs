use std::time::Duration;

pub const API_BASE: &str = "https://api.medici.internal/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Margin classification ladder, evaluated top-down (percent of sell price).
pub const MARGIN_EXCELLENT: f64 = 15.0;
pub const MARGIN_GOOD: f64 = 10.0;
pub const MARGIN_MARGINAL: f64 = 5.0;

// Normalized-slope thresholds for trend direction. Fixed business
// heuristics, not derived from the data.
pub const TREND_UP_THRESHOLD: f64 = 0.05;
pub const TREND_DOWN_THRESHOLD: f64 = -0.05;

// Default polling cadences, by data volatility.
pub const POLL_REALTIME: Duration = Duration::from_secs(5);
pub const POLL_ALERTS: Duration = Duration::from_secs(30);
pub const POLL_COMPETITOR: Duration = Duration::from_secs(120);

// Chart layout defaults.
pub const Y_DOMAIN_MARGIN: f64 = 0.10;
pub const HORIZONTAL_GRIDLINES: usize = 5;
pub const VERTICAL_GRIDLINES: usize = 6;

/// Multiplicative seasonal price factor for a calendar month (1-12).
///
/// Summer and the winter-holiday month are weighted up, shoulder seasons are
/// flat, low season is weighted down. Months outside 1-12 return the neutral
/// factor.
pub fn seasonal_multiplier(month: u32) -> f64 {
    match month {
        1 => 0.85,
        2 => 0.90,
        3 => 0.95,
        4 => 1.00,
        5 => 1.05,
        6 => 1.20,
        7 => 1.30,
        8 => 1.25,
        9 => 1.05,
        10 => 1.00,
        11 => 0.90,
        12 => 1.20,
        _ => 1.00,
    }
}
