//! Testing utilities including mock implementations.
//!
//! These exercise the pipeline without real search, language-model, or
//! extraction calls. Every mock records its calls for assertions.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, RoundupError};
use crate::traits::{ChatModel, Extractor, Searcher};
use crate::types::SearchResult;

/// Scripted chat model.
///
/// Replies are consumed in order; once the script runs out, every further
/// call returns `"{}"`.
#[derive(Default)]
pub struct MockModel {
    script: Arc<RwLock<VecDeque<ScriptedReply>>>,
    calls: Arc<RwLock<Vec<ModelCall>>>,
}

enum ScriptedReply {
    Reply(String),
    Fail(String),
}

/// Record of one completion request.
#[derive(Debug, Clone)]
pub struct ModelCall {
    pub system: String,
    pub user: String,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub fn with_response(self, reply: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(ScriptedReply::Reply(reply.into()));
        self
    }

    /// Queue a failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(ScriptedReply::Fail(message.into()));
        self
    }

    /// Get all completion requests made so far.
    pub fn calls(&self) -> Vec<ModelCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.write().unwrap().push(ModelCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        match self.script.write().unwrap().pop_front() {
            Some(ScriptedReply::Reply(reply)) => Ok(reply),
            Some(ScriptedReply::Fail(message)) => Err(RoundupError::Completion(message.into())),
            None => Ok("{}".to_string()),
        }
    }
}

/// Fixed-result searcher.
#[derive(Default)]
pub struct MockSearch {
    results: Vec<SearchResult>,
    failure: Option<String>,
    calls: Arc<RwLock<Vec<SearchCall>>>,
}

/// Record of one search request.
#[derive(Debug, Clone)]
pub struct SearchCall {
    pub query: String,
    pub limit: u32,
}

impl MockSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a result to return.
    pub fn with_result(mut self, result: SearchResult) -> Self {
        self.results.push(result);
        self
    }

    /// Make every search fail.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Get all search requests made so far.
    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Searcher for MockSearch {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        self.calls.write().unwrap().push(SearchCall {
            query: query.to_string(),
            limit,
        });

        if let Some(message) = &self.failure {
            return Err(RoundupError::SearchUnavailable(message.clone().into()));
        }

        Ok(self
            .results
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Fixed-payload extractor.
#[derive(Default)]
pub struct MockExtractor {
    payload: Value,
    failure: Option<String>,
    calls: Arc<RwLock<Vec<ExtractCall>>>,
}

/// Record of one extraction request.
#[derive(Debug, Clone)]
pub struct ExtractCall {
    pub urls: Vec<String>,
    pub prompt: String,
    pub enable_web_search: bool,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload returned by every call.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Make every extraction fail.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Get all extraction requests made so far.
    pub fn calls(&self) -> Vec<ExtractCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract(
        &self,
        urls: &[String],
        prompt: &str,
        enable_web_search: bool,
    ) -> Result<Value> {
        self.calls.write().unwrap().push(ExtractCall {
            urls: urls.to_vec(),
            prompt: prompt.to_string(),
            enable_web_search,
        });

        if let Some(message) = &self.failure {
            return Err(RoundupError::Extraction(message.clone().into()));
        }

        Ok(self.payload.clone())
    }
}
