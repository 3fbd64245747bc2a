//! Adapters binding the service clients to the capability traits.
//!
//! Each adapter owns a configured client and translates between the
//! client's types and the pipeline's. Construct clients once and pass
//! them in; nothing here reads the environment.

use async_trait::async_trait;
use serde_json::Value;

use deepseek_client::{ChatRequest, DeepSeekClient, Message};
use firecrawl_client::FirecrawlClient;
use serpapi_client::{OrganicResult, SerpApiClient};

use crate::error::{Result, RoundupError};
use crate::traits::{ChatModel, Extractor, Searcher};
use crate::types::SearchResult;

/// Model both language-model passes default to.
pub const DEFAULT_MODEL: &str = "deepseek-reasoner";

/// SerpAPI-backed searcher.
pub struct SerpApiSearcher {
    client: SerpApiClient,
}

impl SerpApiSearcher {
    pub fn new(client: SerpApiClient) -> Self {
        Self { client }
    }
}

// Results without a link cannot be followed downstream; drop them here.
fn to_search_results(organic: Vec<OrganicResult>) -> Vec<SearchResult> {
    organic
        .into_iter()
        .filter_map(|r| {
            let link = r.link?;
            Some(SearchResult::new(
                r.title.unwrap_or_default(),
                link,
                r.snippet.unwrap_or_default(),
            ))
        })
        .collect()
}

#[async_trait]
impl Searcher for SerpApiSearcher {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        let organic = self
            .client
            .search(query, limit)
            .await
            .map_err(|e| RoundupError::SearchUnavailable(Box::new(e)))?;

        Ok(to_search_results(organic))
    }
}

/// DeepSeek-backed chat model.
pub struct DeepSeekModel {
    client: DeepSeekClient,
    model: String,
}

impl DeepSeekModel {
    pub fn new(client: DeepSeekClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different model for completions.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl ChatModel for DeepSeekModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest::new(self.model.clone())
            .message(Message::system(system))
            .message(Message::user(user));

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| RoundupError::Completion(Box::new(e)))?;

        Ok(response.content)
    }
}

/// Firecrawl-backed extractor.
pub struct FirecrawlExtractor {
    client: FirecrawlClient,
}

impl FirecrawlExtractor {
    pub fn new(client: FirecrawlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Extractor for FirecrawlExtractor {
    async fn extract(
        &self,
        urls: &[String],
        prompt: &str,
        enable_web_search: bool,
    ) -> Result<Value> {
        self.client
            .extract(urls, prompt, enable_web_search)
            .await
            .map_err(|e| RoundupError::Extraction(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linkless_results_dropped() {
        let organic = vec![
            OrganicResult {
                title: Some("Best Restaurants".to_string()),
                link: Some("https://eater.com/maps/best".to_string()),
                snippet: Some("A ranked list.".to_string()),
            },
            OrganicResult {
                title: Some("No link here".to_string()),
                link: None,
                snippet: None,
            },
        ];

        let results = to_search_results(organic);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].link, "https://eater.com/maps/best");
        assert_eq!(results[0].title, "Best Restaurants");
    }

    #[test]
    fn test_missing_title_and_snippet_become_empty() {
        let organic = vec![OrganicResult {
            title: None,
            link: Some("https://eater.com/maps/best".to_string()),
            snippet: None,
        }];

        let results = to_search_results(organic);
        assert_eq!(results[0].title, "");
        assert_eq!(results[0].snippet, "");
    }
}
