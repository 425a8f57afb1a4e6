//! Synthetic fallback data generators.
//!
//! Used when the remote service is unavailable (or the facade is built in
//! offline mode) so dashboards still have something illustrative to render.
//! Everything produced here is tagged
//! [`DataOrigin::Synthetic`](crate::models::DataOrigin) and must stay
//! visibly flagged all the way to the UI binding.

use rand::prelude::*;

use crate::models::{PriceQuote, PriceSeries, TimeSeriesPoint};

/// Nightly rate the generators drift around, in display currency.
const BASE_PRICE: f64 = 120.0;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Generate a synthetic price history: one point per day-before-arrival,
/// a gentle upward drift toward arrival plus bounded noise.
///
/// Points are stored in time order, from `x = days - 1` (furthest out) down
/// to `x = 0` (arrival day); the chart mapper re-sorts by `x` on its own.
pub fn price_history(days: u32) -> PriceSeries {
    let mut rng = thread_rng();
    let mut price = BASE_PRICE * rng.gen_range(0.8..1.2);

    let mut points = Vec::with_capacity(days as usize);
    for day in (0..days).rev() {
        // Prices firm up as arrival approaches.
        let drift = 1.0 + rng.gen_range(0.000..0.015);
        let noise = rng.gen_range(-0.03..0.03);
        price = (price * drift * (1.0 + noise)).max(1.0);
        points.push(TimeSeriesPoint::new(day as f64, round_cents(price)));
    }

    PriceSeries::synthetic(points)
}

/// Generate a plausible buy/sell quote around the base rate.
pub fn quote() -> PriceQuote {
    let mut rng = thread_rng();
    let buy_price = round_cents(BASE_PRICE * rng.gen_range(0.6..0.9));
    let markup = rng.gen_range(1.1..1.5);
    PriceQuote {
        buy_price,
        sell_price: round_cents(buy_price * markup),
        nights: rng.gen_range(1..=7),
        commission_percent: rng.gen_range(8.0..15.0),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
