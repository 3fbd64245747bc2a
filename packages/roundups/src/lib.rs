//! Curated food-review roundup collection.
//!
//! Four sequential stages collect "best of" food-review collections from
//! supported publisher sites: a web search finds candidate pages, a
//! language model filters them down to genuine curated collections, an
//! extraction service pulls structured data from the survivors, and a
//! second language-model pass deduplicates the result.
//!
//! The heavy lifting (ranking, classification, extraction, deduplication)
//! is delegated to external services. This crate owns the sequencing, the
//! site registry, the prompts, and the degradation policy that keeps one
//! failed stage from sinking a run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use roundups::{Pipeline, SiteRegistry};
//! use roundups::providers::{DeepSeekModel, FirecrawlExtractor, SerpApiSearcher};
//!
//! let pipeline = Pipeline::new(
//!     SiteRegistry::builtin(),
//!     Arc::new(SerpApiSearcher::new(SerpApiClient::from_env()?)),
//!     Arc::new(DeepSeekModel::new(DeepSeekClient::from_env()?)),
//!     Arc::new(FirecrawlExtractor::new(FirecrawlClient::from_env()?)),
//! );
//!
//! let harvest = pipeline.harvest("eater", "new york", None).await?;
//! if !harvest.is_clean() {
//!     for degradation in &harvest.degradations {
//!         eprintln!("{}", degradation);
//!     }
//! }
//! println!("{}", serde_json::to_string_pretty(&harvest.data)?);
//! ```
//!
//! # Modules
//!
//! - [`sites`] - Site registry and per-site configuration
//! - [`traits`] - Capability traits for the external services
//! - [`providers`] - Adapters binding the real clients to those traits
//! - [`pipeline`] - The four-stage pipeline and its degradation policy
//! - [`relevance`] - First language-model pass: SERP classification
//! - [`consolidate`] - Second language-model pass: deduplication
//! - [`prompts`] - Prompt constants and formatting
//! - [`parse`] - Layered JSON parsing policy for model output
//! - [`testing`] - Mock implementations for tests

pub mod consolidate;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod relevance;
pub mod sites;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{Degradation, Result, RoundupError, Stage};
pub use pipeline::{Pipeline, DEFAULT_MAX_RESULTS};
pub use sites::{
    Passthrough, ResultProcessor, SearchQuery, SiteConfig, SiteKind, SiteRegistry,
    DEFAULT_WINDOW_START,
};
pub use traits::{ChatModel, Extractor, Searcher};
pub use types::{Harvest, Payload, SearchResult};

// Re-export stage functions
pub use consolidate::deduplicate;
pub use relevance::select_collection_urls;

// Re-export provider adapters
pub use providers::{DeepSeekModel, FirecrawlExtractor, SerpApiSearcher, DEFAULT_MODEL};
