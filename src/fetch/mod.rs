//! Fetching position records from the content API.
//!
//! The source is an external collaborator: one GET per call, no retry,
//! no redirect following. [`PositionSource`] is the seam that lets the
//! rest of the pipeline run against injected fakes in tests.

use async_trait::async_trait;
use reqwest::redirect;
use std::time::Duration;
use tracing::debug;

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::experience::record::RawPosition;

/// A source of position records.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Fetches the flat position record list.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the source is unreachable, responds
    /// with a non-success status, or returns an undecodable body.
    async fn fetch_positions(&self) -> Result<Vec<RawPosition>, FetchError>;
}

/// HTTP implementation of [`PositionSource`] against the content API.
///
/// Sends the API key as both `Authorization: Bearer` and `apikey`
/// headers, matching what the upstream expects.
#[derive(Debug, Clone)]
pub struct HttpPositionSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpPositionSource {
    /// Builds a source from explicit configuration.
    ///
    /// No redirect following; the configured URL is the whole contract.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should never happen).
    #[must_use]
    pub fn new(config: SourceConfig) -> Self {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }
}

#[async_trait]
impl PositionSource for HttpPositionSource {
    async fn fetch_positions(&self) -> Result<Vec<RawPosition>, FetchError> {
        debug!(url = %self.config.url, "fetching position records");

        let response = self
            .client
            .get(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .header("apikey", &self.config.api_key)
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let records: Vec<RawPosition> = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.to_string())
            } else {
                self.classify(&e)
            }
        })?;

        debug!(count = records.len(), "fetched position records");
        Ok(records)
    }
}

impl HttpPositionSource {
    fn classify(&self, error: &reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::TimedOut {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_config(url: &str) -> SourceConfig {
        SourceConfig {
            url: url.to_string(),
            api_key: "test-key".to_string(),
            timeout_ms: 500,
        }
    }

    #[test]
    fn builds_from_config() {
        let source = HttpPositionSource::new(source_config("https://data.example.test"));
        assert_eq!(source.config.timeout_ms, 500);
    }

    #[tokio::test]
    async fn unreachable_source_is_a_network_error() {
        // Port 1 on localhost refuses the connection immediately.
        let source = HttpPositionSource::new(source_config("http://127.0.0.1:1/positions"));
        let err = source.fetch_positions().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Network(_) | FetchError::TimedOut { .. }
        ));
    }
}
