use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PriceQuote — user-entered buy/sell terms for an opportunity
// ---------------------------------------------------------------------------

/// Buy/sell terms for a single room opportunity.
///
/// Ephemeral input: created per user edit and recomputed on every field
/// change, never persisted. Negative or zero values are accepted; the profit
/// engine degrades to neutral output rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub buy_price: f64,
    pub sell_price: f64,
    pub nights: u32,
    pub commission_percent: f64,
}

// ---------------------------------------------------------------------------
// Recommendation — categorical deal classification
// ---------------------------------------------------------------------------

/// Categorical recommendation derived from the net margin ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Either price is zero/unset; no verdict yet.
    EnterPrices,
    Excellent,
    Good,
    Marginal,
    Risky,
    Avoid,
}

impl Recommendation {
    /// Human-readable label matching the console's deal-assistant copy.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::EnterPrices => "enter prices",
            Recommendation::Excellent => "excellent",
            Recommendation::Good => "good",
            Recommendation::Marginal => "marginal, proceed with caution",
            Recommendation::Risky => "low margin, risky",
            Recommendation::Avoid => "loss-making, avoid",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ProfitResult — derived profitability breakdown
// ---------------------------------------------------------------------------

/// Full profitability breakdown for a [`PriceQuote`].
///
/// Derived deterministically; invariants:
/// `gross_profit == sell_price - buy_price` and
/// `net_profit == gross_profit - commission_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResult {
    pub gross_profit: f64,
    pub commission_amount: f64,
    pub net_profit: f64,
    /// Net profit as a percentage of sell price; 0 when sell price is 0.
    pub margin_percent: f64,
    /// Net profit as a percentage of buy price (capital invested); 0 when
    /// buy price is 0.
    pub roi_percent: f64,
    pub profit_per_night: f64,
    pub recommendation: Recommendation,
}
