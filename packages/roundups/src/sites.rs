//! Site registry and per-site configuration.
//!
//! Publishers differ only in data (homepage domain, extraction prompt),
//! not in algorithm, so each one is a [`SiteConfig`] record in a
//! [`SiteRegistry`] rather than its own type. Adding a publisher means
//! adding a registry entry; the pipeline never changes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Result, RoundupError};

/// Default publication cutoff for time-windowed queries.
pub const DEFAULT_WINDOW_START: &str = "2024-01-01";

/// Michelin guide pages carry award metadata the generic prompt misses.
const MICHELIN_PROMPT: &str = "Extract every restaurant featured in these curated \
guide collections from guide.michelin.com. For each restaurant include its name, \
its distinction (stars or Bib Gourmand) if any, the collection it appeared in, \
and what the guide said about it.";

/// Kind of publisher a site is.
///
/// All current entries are blogs; forums are a registry category waiting
/// for entries, not a different pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Blog,
    Forum,
}

/// A fully interpolated search query.
///
/// Only [`SiteConfig::build_query`] constructs these, so holding one means
/// the site filter, location, and sentiment keywords are already in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-site hook applied to consolidated output before it is returned.
pub trait ResultProcessor: Send + Sync {
    fn process(&self, data: Value) -> Value;
}

/// Default processor: returns the data untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl ResultProcessor for Passthrough {
    fn process(&self, data: Value) -> Value {
        data
    }
}

/// Configuration record for one supported publisher.
///
/// Immutable once constructed; the registry owns one per site.
#[derive(Clone)]
pub struct SiteConfig {
    id: String,
    homepage: String,
    kind: SiteKind,
    extraction_prompt: String,
    processor: Arc<dyn ResultProcessor>,
}

impl SiteConfig {
    /// Create a site config with the default extraction prompt.
    ///
    /// `homepage` is the bare domain used in `site:` search filters.
    pub fn new(id: impl Into<String>, homepage: impl Into<String>, kind: SiteKind) -> Self {
        let id = id.into();
        let homepage = homepage.into();
        let extraction_prompt = format!(
            "Extract every restaurant, bar, or dish featured in these curated \
             food-review collections from {}. For each item include its name, \
             the collection it appeared in, and what the reviewer said about it.",
            homepage
        );

        Self {
            id,
            homepage,
            kind,
            extraction_prompt,
            processor: Arc::new(Passthrough),
        }
    }

    /// Override the extraction prompt.
    pub fn with_extraction_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.extraction_prompt = prompt.into();
        self
    }

    /// Install a post-processing hook.
    pub fn with_processor(mut self, processor: impl ResultProcessor + 'static) -> Self {
        self.processor = Arc::new(processor);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn kind(&self) -> SiteKind {
        self.kind
    }

    pub fn extraction_prompt(&self) -> &str {
        &self.extraction_prompt
    }

    /// Apply the site's post-processing hook.
    pub fn process(&self, data: Value) -> Value {
        self.processor.process(data)
    }

    /// Build the search query for this site.
    ///
    /// `window: None` never produces an `after:` term; `Some(date)` appends
    /// exactly one `after:YYYY-MM-DD` constraint.
    pub fn build_query(&self, location: &str, window: Option<NaiveDate>) -> SearchQuery {
        let mut query = format!(
            r#"site:{} location:{} ("best" OR "worst" OR "must-try")"#,
            self.homepage, location
        );

        if let Some(date) = window {
            query.push_str(&format!(" after:{}", date));
        }

        SearchQuery(query)
    }
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("id", &self.id)
            .field("homepage", &self.homepage)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Mapping from site identifier to configuration.
pub struct SiteRegistry {
    sites: HashMap<String, SiteConfig>,
}

impl SiteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sites: HashMap::new(),
        }
    }

    /// Registry of the supported publishers.
    pub fn builtin() -> Self {
        Self::new()
            .with_site(SiteConfig::new("eater", "eater.com", SiteKind::Blog))
            .with_site(
                SiteConfig::new("michelin", "guide.michelin.com", SiteKind::Blog)
                    .with_extraction_prompt(MICHELIN_PROMPT),
            )
            .with_site(SiteConfig::new(
                "infatuation",
                "theinfatuation.com",
                SiteKind::Blog,
            ))
    }

    /// Register a site.
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.sites.insert(site.id.clone(), site);
        self
    }

    /// Look up a site by identifier.
    pub fn resolve(&self, id: &str) -> Result<&SiteConfig> {
        self.sites
            .get(id)
            .ok_or_else(|| RoundupError::UnknownSite { id: id.to_string() })
    }

    /// Sorted identifiers of every registered site.
    pub fn site_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sites.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_sites_resolve() {
        let registry = SiteRegistry::builtin();

        for id in ["eater", "michelin", "infatuation"] {
            let site = registry.resolve(id).unwrap();
            assert_eq!(site.id(), id);
            assert!(!site.homepage().is_empty());
            assert_eq!(site.kind(), SiteKind::Blog);
        }
    }

    #[test]
    fn test_unknown_site() {
        let registry = SiteRegistry::builtin();
        let err = registry.resolve("yelp").unwrap_err();
        assert!(matches!(err, RoundupError::UnknownSite { id } if id == "yelp"));
    }

    #[test]
    fn test_build_query_without_window() {
        let registry = SiteRegistry::builtin();
        let site = registry.resolve("eater").unwrap();

        let query = site.build_query("new york", None);
        let query = query.as_str();

        assert!(query.contains("site:eater.com"));
        assert!(query.contains("location:new york"));
        assert!(query.contains(r#""best""#));
        assert!(query.contains(r#""worst""#));
        assert!(query.contains(r#""must-try""#));
        assert!(!query.contains("after:"));
    }

    #[test]
    fn test_build_query_with_window() {
        let registry = SiteRegistry::builtin();
        let site = registry.resolve("michelin").unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let query = site.build_query("chicago", Some(date));

        assert!(query.as_str().contains("site:guide.michelin.com"));
        assert!(query.as_str().ends_with("after:2024-06-01"));
    }

    #[test]
    fn test_default_window_start_parses() {
        let date: NaiveDate = DEFAULT_WINDOW_START.parse().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_default_prompt_mentions_homepage() {
        let site = SiteConfig::new("eater", "eater.com", SiteKind::Blog);
        assert!(site.extraction_prompt().contains("eater.com"));

        let registry = SiteRegistry::builtin();
        let michelin = registry.resolve("michelin").unwrap();
        assert!(michelin.extraction_prompt().contains("Bib Gourmand"));
    }

    #[test]
    fn test_custom_processor() {
        struct Wrap;

        impl ResultProcessor for Wrap {
            fn process(&self, data: Value) -> Value {
                json!({ "wrapped": data })
            }
        }

        let site = SiteConfig::new("test", "example.com", SiteKind::Forum).with_processor(Wrap);

        let out = site.process(json!({"a": 1}));
        assert_eq!(out, json!({"wrapped": {"a": 1}}));
    }

    #[test]
    fn test_site_ids_sorted() {
        let registry = SiteRegistry::builtin();
        assert_eq!(registry.site_ids(), vec!["eater", "infatuation", "michelin"]);
    }
}
