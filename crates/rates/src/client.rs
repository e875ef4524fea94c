use std::time::Duration;

use cost_core::RateTable;
use reqwest::{Client, StatusCode, Url};

use crate::types::{RatesError, Result};

pub const DEFAULT_RATES_URL: &str = "https://cost-manager.github.io/rates/rates.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_rates_url(value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|err| RatesError::InvalidUrl(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(RatesError::InvalidUrl(format!("unsupported scheme {scheme}"))),
    }
}

/// HTTP client for the exchange rate source.
#[derive(Debug, Clone)]
pub struct RateClient {
    client: Client,
    timeout_ms: u64,
}

impl RateClient {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|err| RatesError::Client(err.to_string()))?;
        Ok(Self { client, timeout_ms })
    }

    /// Fetches and validates a rate table. Only a `200 OK` whose body is a
    /// complete table counts as success.
    pub async fn fetch(&self, url: &str) -> Result<RateTable> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(RatesError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;
        serde_json::from_str::<RateTable>(&body).map_err(|err| RatesError::Malformed(err.to_string()))
    }

    pub async fn fetch_or_fallback(&self, url: &str) -> RateTable {
        match self.fetch(url).await {
            Ok(table) => {
                tracing::debug!(url, "fetched exchange rates");
                table
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "rate source unavailable, using fallback rates");
                RateTable::fallback()
            }
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> RatesError {
        if err.is_timeout() {
            RatesError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            RatesError::Network(err.to_string())
        }
    }
}
