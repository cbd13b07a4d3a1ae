//! `reqwest` client for the CWA open-data forecast dataset.

use crate::{ForecastSource, UpstreamError};
use forecast_core::config::UpstreamConfig;
use forecast_core::ForecastResponse;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Path of the 36-hour county forecast dataset, relative to the base URL.
pub const FORECAST_DATASET_PATH: &str = "/api/v1/rest/datastore/F-C0032-001";

/// Production [`ForecastSource`]. One instance (and its connection pool) is
/// shared across all requests.
#[derive(Debug, Clone)]
pub struct CwaClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl CwaClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                FORECAST_DATASET_PATH
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// Full dataset URL, without query parameters.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ForecastSource for CwaClient {
    async fn fetch(&self, location_name: &str) -> Result<ForecastResponse, UpstreamError> {
        tracing::debug!(location = %location_name, endpoint = %self.endpoint, "requesting forecast");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("Authorization", self.api_key.as_str()),
                ("locationName", location_name),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;
            tracing::warn!(status = status.as_u16(), location = %location_name, "upstream returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                content_type,
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
