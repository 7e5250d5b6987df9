//! Federal Register HTTP client
//!
//! Issues plain GET requests against the documents endpoint and decodes the
//! JSON envelope. There is no authentication and no retry: one failed page
//! fails the run.

use super::PageSource;
use crate::config::SourceConfig;
use crate::domain::{DocumentPage, FedRegError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Longest slice of an error response body kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// reqwest-backed [`PageSource`] for the Federal Register API
#[derive(Debug, Clone)]
pub struct FederalRegisterClient {
    client: Client,
}

impl FederalRegisterClient {
    /// Create a new client from the source configuration
    ///
    /// # Errors
    ///
    /// Returns [`FedRegError::Configuration`] if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                FedRegError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for FederalRegisterClient {
    async fn fetch_page(&self, url: &str) -> Result<DocumentPage> {
        tracing::debug!(url = %url, "Requesting page");

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FedRegError::RequestFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(FedRegError::RequestFailed {
                url: url.to_string(),
                reason: format!("non-success status {status}: {body}"),
            });
        }

        // Body read failures are transport problems, not decode problems
        let bytes = resp.bytes().await.map_err(|e| FedRegError::RequestFailed {
            url: url.to_string(),
            reason: format!("failed to read response body: {e}"),
        })?;

        serde_json::from_slice::<DocumentPage>(&bytes).map_err(|e| FedRegError::DecodeFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
