//! Pure DeepSeek REST API client
//!
//! A clean, minimal client for the DeepSeek API with no domain-specific logic.
//! The API is OpenAI-compatible; this client covers chat completions, which is
//! all the reasoner and chat models need.
//!
//! # Example
//!
//! ```rust,ignore
//! use deepseek_client::{DeepSeekClient, ChatRequest, Message};
//!
//! let client = DeepSeekClient::from_env()?;
//!
//! let response = client.chat_completion(ChatRequest {
//!     model: "deepseek-reasoner".into(),
//!     messages: vec![Message::user("Hello!")],
//!     ..Default::default()
//! }).await?;
//!
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod types;

pub use error::{DeepSeekError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.deepseek.com";

/// Default per-request timeout (seconds). Reasoner models can think for a
/// long time before the first byte arrives.
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Pure DeepSeek API client.
#[derive(Clone)]
pub struct DeepSeekClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl DeepSeekClient {
    /// Create a new DeepSeek client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| DeepSeekError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Create from environment variable `DEEPSEEK_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .map_err(|_| DeepSeekError::Config("DEEPSEEK_API_KEY not set".into()))?;
        Self::new(api_key)
    }

    /// Set a custom base URL (for proxies or compatible gateways).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout (seconds).
    pub fn with_request_timeout(mut self, secs: u64) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(Duration::from_secs(secs))
            .build()
            .map_err(|e| DeepSeekError::Config(format!("failed to build http client: {}", e)))?;
        Ok(self)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get a response. For
    /// reasoner models the returned content excludes the reasoning trace.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "DeepSeek request failed");
                DeepSeekError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "DeepSeek API error");
            return Err(DeepSeekError::Api(format!(
                "DeepSeek API error: {}",
                error_text
            )));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| DeepSeekError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DeepSeekError::Api("No response from DeepSeek".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "DeepSeek chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }
}
