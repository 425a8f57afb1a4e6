//! Async HTTP client for the Medici backend API.
//!
//! Thin transport layer: endpoints return either the raw object the view
//! expects or the conventional `{ success, data | error }` envelope, and
//! both shapes are decoded uniformly via
//! [`ApiPayload`](crate::models::ApiPayload). No business logic lives here.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{ApiPayload, PriceSeries, TimeSeriesPoint};

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// HTTP client bound to a backend base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the body, unwrapping the envelope if present.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let payload: ApiPayload<T> = response.json().await?;
        payload.into_result()
    }

    /// Fetch the price history for an opportunity, tagged as live data.
    pub async fn price_history(&self, opportunity_id: &str, days: u32) -> Result<PriceSeries> {
        let path = format!(
            "opportunities/{}/price-history?days={}",
            opportunity_id, days
        );
        let points: Vec<TimeSeriesPoint> = self.get(&path).await?;
        Ok(PriceSeries::live(points))
    }
}
