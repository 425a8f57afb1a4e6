//! ROI/profit engine for room opportunities.
//!
//! Pure functions converting buy/sell terms into a profitability breakdown
//! and a categorical recommendation. All divide-by-zero cases degrade to
//! neutral zeros rather than NaN/infinity, and negative inputs produce
//! negative (loss) outputs rather than errors.
//!
//! # Example
//!
//! ```rust
//! use medici_analytics::models::PriceQuote;
//! use medici_analytics::profit::compute_profit;
//!
//! let quote = PriceQuote {
//!     buy_price: 100.0,
//!     sell_price: 150.0,
//!     nights: 3,
//!     commission_percent: 10.0,
//! };
//! let result = compute_profit(&quote);
//! assert_eq!(result.net_profit, 35.0);
//! ```

use crate::config;
use crate::models::{PriceQuote, ProfitResult, Recommendation};

// ---------------------------------------------------------------------------
// compute_profit
// ---------------------------------------------------------------------------

/// Compute the full profitability breakdown for a quote.
///
/// Deterministic and stateless: identical input always yields identical
/// output. Guards:
///
/// * `margin_percent` is 0 when `sell_price` is 0;
/// * `roi_percent` is 0 when `buy_price` is 0;
/// * `profit_per_night` is 0 when `nights` is 0.
pub fn compute_profit(quote: &PriceQuote) -> ProfitResult {
    let gross_profit = quote.sell_price - quote.buy_price;
    let commission_amount = quote.sell_price * quote.commission_percent / 100.0;
    let net_profit = gross_profit - commission_amount;

    let margin_percent = if quote.sell_price > 0.0 {
        net_profit / quote.sell_price * 100.0
    } else {
        0.0
    };

    let roi_percent = if quote.buy_price > 0.0 {
        net_profit / quote.buy_price * 100.0
    } else {
        0.0
    };

    let profit_per_night = if quote.nights > 0 {
        net_profit / quote.nights as f64
    } else {
        0.0
    };

    ProfitResult {
        gross_profit,
        commission_amount,
        net_profit,
        margin_percent,
        roi_percent,
        profit_per_night,
        recommendation: classify(quote, margin_percent),
    }
}

// ---------------------------------------------------------------------------
// Recommendation ladder
// ---------------------------------------------------------------------------

/// Classify a quote by its net margin.
///
/// Thresholds are evaluated top-down, first match wins (see
/// [`config::MARGIN_EXCELLENT`] and friends). If either price is zero or
/// unset the classifier short-circuits to [`Recommendation::EnterPrices`]
/// regardless of the margin.
pub fn classify(quote: &PriceQuote, margin_percent: f64) -> Recommendation {
    if quote.buy_price <= 0.0 || quote.sell_price <= 0.0 {
        return Recommendation::EnterPrices;
    }

    if margin_percent >= config::MARGIN_EXCELLENT {
        Recommendation::Excellent
    } else if margin_percent >= config::MARGIN_GOOD {
        Recommendation::Good
    } else if margin_percent >= config::MARGIN_MARGINAL {
        Recommendation::Marginal
    } else if margin_percent > 0.0 {
        Recommendation::Risky
    } else {
        Recommendation::Avoid
    }
}
