//! forecast-upstream — the outbound side of forecast-proxy.
//!
//! Handlers never talk to `reqwest` directly. They hold something that
//! implements [`ForecastSource`], which in production is [`CwaClient`] and in
//! tests is whatever canned source the harness needs.

pub mod client;

pub use client::{CwaClient, FORECAST_DATASET_PATH};

use forecast_core::ForecastResponse;
use std::future::Future;

/// Failure while fetching a forecast from the upstream API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout, broken body, …
    ///
    /// The request URL is stripped on conversion: it carries the API key.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream responded with HTTP {status}")]
    Status {
        status: u16,
        content_type: Option<String>,
        body: String,
    },

    /// The upstream answered 2xx but the body was not the expected shape.
    #[error("malformed upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.without_url())
    }
}

/// Anything that can produce the raw forecast envelope for a location name.
///
/// `location_name` is already canonicalised by the caller.
pub trait ForecastSource: Send + Sync {
    fn fetch(
        &self,
        location_name: &str,
    ) -> impl Future<Output = Result<ForecastResponse, UpstreamError>> + Send;
}
