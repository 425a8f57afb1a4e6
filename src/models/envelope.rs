use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

// ---------------------------------------------------------------------------
// ApiEnvelope — conventional { success, data | error } response shape
// ---------------------------------------------------------------------------

/// The backend's conventional response envelope.
///
/// Endpoints return either a bare object or this wrapper; see
/// [`ApiPayload`] for decoding both shapes uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into the payload or an [`AnalyticsError::Api`].
    pub fn into_result(self) -> Result<T> {
        if self.success {
            self.data.ok_or_else(|| {
                AnalyticsError::Api("envelope marked success but carried no data".to_string())
            })
        } else {
            Err(AnalyticsError::Api(
                self.error.unwrap_or_else(|| "unspecified API error".to_string()),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// ApiPayload — bare object or envelope, decoded uniformly
// ---------------------------------------------------------------------------

/// A response body that is either the raw object the view expects or an
/// [`ApiEnvelope`] around it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    Envelope(ApiEnvelope<T>),
    Bare(T),
}

impl<T> ApiPayload<T> {
    /// Unwrap either shape into the payload.
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiPayload::Envelope(env) => env.into_result(),
            ApiPayload::Bare(value) => Ok(value),
        }
    }
}
