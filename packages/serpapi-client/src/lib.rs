//! Pure SerpAPI REST client.
//!
//! A minimal client for the SerpAPI search endpoint. Runs a Google engine
//! search and returns the organic results in engine order.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::SerpApiClient;
//!
//! let client = SerpApiClient::from_env()?;
//!
//! let results = client.search("site:eater.com best pizza", 10).await?;
//! for result in &results {
//!     println!("{:?}: {:?}", result.title, result.link);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpApiError};
pub use types::{OrganicResult, SearchResponse};

use std::time::Duration;

const BASE_URL: &str = "https://serpapi.com/search.json";

/// Search engine requested from SerpAPI.
const ENGINE: &str = "google";

/// Default per-request timeout (seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
}

impl SerpApiClient {
    /// Create a new SerpAPI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Create from environment variable `SERP_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SERP_API_KEY")
            .map_err(|_| SerpApiError::Config("SERP_API_KEY not set".into()))?;
        Self::new(api_key)
    }

    /// Set the per-request timeout (seconds).
    pub fn with_request_timeout(mut self, secs: u64) -> Result<Self> {
        self.client = reqwest::Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()?;
        Ok(self)
    }

    /// Run a Google search and return the organic results.
    ///
    /// `num` caps how many results SerpAPI returns. Ordering is the engine's
    /// ranking and is preserved.
    pub async fn search(&self, query: &str, num: u32) -> Result<Vec<OrganicResult>> {
        tracing::info!(query, num, "Running SerpAPI search");

        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("engine", ENGINE),
                ("q", query),
                ("num", &num.to_string()),
                ("api_key", &self.api_key),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_resp: SearchResponse = resp.json().await?;
        tracing::info!(
            count = search_resp.organic_results.len(),
            "Fetched organic results"
        );

        Ok(search_resp.organic_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = SerpApiClient::new("test-key").unwrap();
        assert_eq!(client.api_key, "test-key");

        let client = client.with_request_timeout(5).unwrap();
        assert_eq!(client.api_key, "test-key");
    }
}
