//! Client-side analytics for the Medici arbitrage console.
//!
//! One shared library for the computation the dashboard widgets used to
//! reimplement independently: ROI/profit breakdowns for room opportunities,
//! price trend estimation, chart coordinate mapping, and periodic data
//! refresh against the backend REST API. When the backend is unreachable
//! (or the facade is built offline) synthetic fallback data is served
//! instead, always tagged as such.
//!
//! # Quick start
//!
//! ```no_run
//! use medici_analytics::MediciAnalytics;
//! use medici_analytics::models::PriceQuote;
//! use medici_analytics::profit::compute_profit;
//!
//! # async fn example() -> medici_analytics::Result<()> {
//! let medici = MediciAnalytics::builder().offline(true).build()?;
//!
//! // Fetch (or synthesize) a price history and poll it every 30 seconds.
//! let history = medici.price_history("opp-123", 30).await?;
//! let poller = medici.poll_price_history("opp-123", 30, medici_analytics::config::POLL_ALERTS);
//!
//! // Pure computation needs no facade.
//! let quote = PriceQuote {
//!     buy_price: 100.0,
//!     sell_price: 150.0,
//!     nights: 3,
//!     commission_percent: 10.0,
//! };
//! let result = compute_profit(&quote);
//! # poller.stop();
//! # let _ = (history, result);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod poller;
pub mod profit;
pub mod trend;

pub use client::ApiClient;
pub use error::{AnalyticsError, Result};
pub use poller::{PollSnapshot, Poller};

use std::fmt;
use std::time::Duration;

use crate::models::PriceSeries;

// ---------------------------------------------------------------------------
// MediciAnalyticsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`MediciAnalytics`] instance.
///
/// Use [`MediciAnalytics::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](MediciAnalyticsBuilder::build).
pub struct MediciAnalyticsBuilder {
    base_url: String,
    timeout: Duration,
    offline: bool,
}

impl Default for MediciAnalyticsBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            offline: false,
        }
    }
}

impl MediciAnalyticsBuilder {
    /// Point the facade at a different backend base URL.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the facade never contacts the backend and serves
    /// synthetic data from [`mock`] instead — always tagged
    /// [`DataOrigin::Synthetic`](models::DataOrigin). Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Build the facade, constructing the HTTP client.
    pub fn build(self) -> Result<MediciAnalytics> {
        let client = ApiClient::new(&self.base_url, self.timeout)?;
        Ok(MediciAnalytics {
            client,
            offline: self.offline,
        })
    }
}

// ---------------------------------------------------------------------------
// MediciAnalytics
// ---------------------------------------------------------------------------

/// Entry point for backend-fed analytics.
///
/// Owns the [`ApiClient`] and hands out per-widget [`Poller`]s. The pure
/// computation modules ([`profit`], [`trend`], [`chart`]) are free functions
/// and need no facade instance.
pub struct MediciAnalytics {
    client: ApiClient,
    offline: bool,
}

impl MediciAnalytics {
    /// Create a new builder for configuring the facade.
    pub fn builder() -> MediciAnalyticsBuilder {
        MediciAnalyticsBuilder::default()
    }

    /// Whether the facade was built in offline (synthetic data) mode.
    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// Fetch the price history for an opportunity over the last `days`
    /// days-before-arrival.
    ///
    /// In offline mode this returns a synthetic series instead; the caller
    /// can (and should) distinguish the two via
    /// [`PriceSeries::origin`](models::PriceSeries).
    pub async fn price_history(&self, opportunity_id: &str, days: u32) -> Result<PriceSeries> {
        if self.offline {
            Ok(mock::price_history(days))
        } else {
            self.client.price_history(opportunity_id, days).await
        }
    }

    /// Start polling the price history for an opportunity.
    ///
    /// Cadence is caller-specified; see the named defaults in [`config`]
    /// ([`config::POLL_REALTIME`], [`config::POLL_ALERTS`],
    /// [`config::POLL_COMPETITOR`]). Each widget should own its handle and
    /// call [`Poller::stop`] on teardown.
    pub fn poll_price_history(
        &self,
        opportunity_id: &str,
        days: u32,
        interval: Duration,
    ) -> Poller<PriceSeries> {
        let client = self.client.clone();
        let offline = self.offline;
        let id = opportunity_id.to_string();
        Poller::start(interval, move || {
            let client = client.clone();
            let id = id.clone();
            async move {
                if offline {
                    Ok(mock::price_history(days))
                } else {
                    client.price_history(&id, days).await
                }
            }
        })
    }

    /// Return a reference to the underlying [`ApiClient`] for endpoints not
    /// covered by the facade methods.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for MediciAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MediciAnalytics(base_url={}, offline={})",
            self.client.base_url(),
            self.offline
        )
    }
}
