//! Capability traits for the external services the pipeline calls.
//!
//! Each stage depends on a trait, not a concrete client, so applications
//! inject configured clients at construction time and tests substitute
//! the mocks in [`crate::testing`]. Adapters binding the real service
//! clients live in [`crate::providers`].

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::SearchResult;

/// Ranked web search.
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Run a query and return up to `limit` results in engine order.
    ///
    /// Ordering is significant: it is the relevance prior the selection
    /// model sees.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>>;
}

/// Chat-completion language model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send a system instruction plus user content, return the reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Batch URL-to-structured-data extraction service.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract data from `urls` according to `prompt`. One attempt, no
    /// retry; `enable_web_search` lets the service fetch supplementary
    /// pages beyond the given URLs.
    async fn extract(
        &self,
        urls: &[String],
        prompt: &str,
        enable_web_search: bool,
    ) -> Result<Value>;
}
