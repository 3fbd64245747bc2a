//! Pure Firecrawl REST client for the extract endpoint.
//!
//! Firecrawl's extract API is asynchronous: a `POST /extract` starts a job
//! and returns an id, then `GET /extract/{id}` is polled until the job
//! completes. [`FirecrawlClient::extract`] wraps the whole cycle.
//!
//! # Example
//!
//! ```rust,ignore
//! use firecrawl_client::FirecrawlClient;
//!
//! let client = FirecrawlClient::from_env()?;
//!
//! let urls = vec!["https://example.com/best-pizza".to_string()];
//! let data = client.extract(&urls, "Extract every restaurant", true).await?;
//! println!("{}", serde_json::to_string_pretty(&data)?);
//! ```

pub mod error;
pub mod types;

pub use error::{FirecrawlError, Result};
pub use types::{ExtractRequest, ExtractStartResponse, ExtractStatusResponse};

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BASE_URL: &str = "https://api.firecrawl.dev/v1";

/// Default per-request timeout (seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    /// Timeout for polling extract status (seconds)
    poll_timeout_secs: u64,
    /// Interval between poll attempts (seconds)
    poll_interval_secs: u64,
}

impl FirecrawlClient {
    /// Create a new Firecrawl client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            poll_timeout_secs: 300, // 5 minutes
            poll_interval_secs: 5,
        })
    }

    /// Create from environment variable `FIRECRAWL_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FIRECRAWL_API_KEY")
            .map_err(|_| FirecrawlError::Config("FIRECRAWL_API_KEY not set".into()))?;
        Self::new(api_key)
    }

    /// Set the poll timeout (seconds).
    pub fn with_poll_timeout(mut self, secs: u64) -> Self {
        self.poll_timeout_secs = secs;
        self
    }

    /// Set the poll interval (seconds).
    pub fn with_poll_interval(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// Set the per-request timeout (seconds).
    pub fn with_request_timeout(mut self, secs: u64) -> Result<Self> {
        self.client = Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()?;
        Ok(self)
    }

    async fn post<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<R> {
        let url = format!("{}{}", BASE_URL, endpoint);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FirecrawlError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(response.json().await?)
    }

    async fn get<R: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<R> {
        let url = format!("{}{}", BASE_URL, endpoint);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FirecrawlError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(response.json().await?)
    }

    /// Start an extract job and return its id.
    pub async fn start_extract(
        &self,
        urls: &[String],
        prompt: &str,
        enable_web_search: bool,
    ) -> Result<String> {
        let request = ExtractRequest {
            urls: urls.to_vec(),
            prompt: prompt.to_string(),
            enable_web_search,
        };

        let response: ExtractStartResponse = self.post("/extract", &request).await?;

        if !response.success {
            return Err(FirecrawlError::JobFailed(
                "extract job was not accepted".into(),
            ));
        }

        response
            .id
            .ok_or_else(|| FirecrawlError::JobFailed("no job id returned".into()))
    }

    /// Fetch the current status of an extract job.
    pub async fn extract_status(&self, job_id: &str) -> Result<ExtractStatusResponse> {
        self.get(&format!("/extract/{}", job_id)).await
    }

    /// Run an extract job to completion.
    ///
    /// Starts the job, then polls until it completes or the poll timeout
    /// elapses. Returns whatever JSON the extraction produced; a completed
    /// job with no data yields [`Value::Null`].
    pub async fn extract(
        &self,
        urls: &[String],
        prompt: &str,
        enable_web_search: bool,
    ) -> Result<Value> {
        tracing::info!(
            url_count = urls.len(),
            enable_web_search,
            "Starting Firecrawl extract"
        );

        let job_id = self.start_extract(urls, prompt, enable_web_search).await?;

        tracing::info!(job_id = %job_id, "Extract started, polling for results");

        let max_attempts = self.poll_timeout_secs / self.poll_interval_secs;
        let mut attempts = 0;

        loop {
            attempts += 1;
            if attempts > max_attempts {
                return Err(FirecrawlError::Timeout {
                    job_id,
                    secs: self.poll_timeout_secs,
                });
            }

            tokio::time::sleep(Duration::from_secs(self.poll_interval_secs)).await;

            let poll: ExtractStatusResponse = self.extract_status(&job_id).await?;

            match poll.status.as_str() {
                "completed" => {
                    tracing::info!(job_id = %job_id, "Firecrawl extract completed");
                    return Ok(poll.data.unwrap_or(Value::Null));
                }
                "failed" | "cancelled" => {
                    let reason = poll
                        .error
                        .unwrap_or_else(|| format!("job ended with status {}", poll.status));
                    return Err(FirecrawlError::JobFailed(reason));
                }
                _ => {
                    // Still processing, continue polling
                    if attempts % 6 == 0 {
                        tracing::info!(
                            job_id = %job_id,
                            status = %poll.status,
                            "Extract in progress"
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = FirecrawlClient::new("test-key").unwrap();
        assert_eq!(client.poll_timeout_secs, 300);
        assert_eq!(client.poll_interval_secs, 5);
    }

    #[test]
    fn test_poll_builders() {
        let client = FirecrawlClient::new("test-key")
            .unwrap()
            .with_poll_timeout(60)
            .with_poll_interval(2);

        assert_eq!(client.poll_timeout_secs, 60);
        assert_eq!(client.poll_interval_secs, 2);
    }
}
