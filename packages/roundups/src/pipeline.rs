//! The four-stage collection pipeline.
//!
//! Search, relevance filter, extraction, consolidation: each stage
//! completes before the next starts, and every stage failure except an
//! unknown site id degrades to an empty or passthrough value recorded on
//! the [`Harvest`] rather than aborting the run. One failed stage must
//! not sink a multi-site batch.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::consolidate::deduplicate;
use crate::error::{Degradation, Result, Stage};
use crate::relevance::select_collection_urls;
use crate::sites::SiteRegistry;
use crate::traits::{ChatModel, Extractor, Searcher};
use crate::types::{Harvest, Payload};

/// Search results requested per run.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Sequenced pipeline over injected service capabilities.
pub struct Pipeline {
    registry: SiteRegistry,
    searcher: Arc<dyn Searcher>,
    model: Arc<dyn ChatModel>,
    extractor: Arc<dyn Extractor>,
    max_results: u32,
    enable_web_search: bool,
}

impl Pipeline {
    pub fn new(
        registry: SiteRegistry,
        searcher: Arc<dyn Searcher>,
        model: Arc<dyn ChatModel>,
        extractor: Arc<dyn Extractor>,
    ) -> Self {
        Self {
            registry,
            searcher,
            model,
            extractor,
            max_results: DEFAULT_MAX_RESULTS,
            enable_web_search: true,
        }
    }

    /// Cap the number of search results per run.
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Let the extraction service run supplementary web searches.
    pub fn with_web_search(mut self, enable: bool) -> Self {
        self.enable_web_search = enable;
        self
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Run one collection pass for a site.
    ///
    /// Fails only when `site_id` is not registered. Everything else the
    /// stages can throw is absorbed into `Harvest::degradations`.
    pub async fn harvest(
        &self,
        site_id: &str,
        location: &str,
        window: Option<NaiveDate>,
    ) -> Result<Harvest> {
        let site = self.registry.resolve(site_id)?;
        let query = site.build_query(location, window);

        info!(site = site_id, query = %query, "Starting harvest");

        let mut degradations = Vec::new();

        let results = match self.searcher.search(query.as_str(), self.max_results).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "Search degraded to empty results");
                degradations.push(Degradation::new(Stage::Search, &e));
                Vec::new()
            }
        };

        let candidates = match select_collection_urls(self.model.as_ref(), &results).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!(error = %e, "Relevance filter degraded to empty selection");
                degradations.push(Degradation::new(Stage::Relevance, &e));
                Vec::new()
            }
        };

        let payload = if candidates.is_empty() {
            info!("No candidate collections, skipping extraction");
            Payload::Empty
        } else {
            match self
                .extractor
                .extract(&candidates, site.extraction_prompt(), self.enable_web_search)
                .await
            {
                Ok(value) => Payload::from_value(value),
                Err(e) => {
                    warn!(error = %e, "Extraction degraded to empty payload");
                    degradations.push(Degradation::new(Stage::Extraction, &e));
                    Payload::Empty
                }
            }
        };

        let data = match deduplicate(
            self.model.as_ref(),
            &payload,
            site.homepage(),
            site.extraction_prompt(),
        )
        .await
        {
            Ok(value) => value,
            // Losing extracted data is worse than returning it unconsolidated.
            Err(e) => {
                warn!(error = %e, "Consolidation degraded to passthrough");
                degradations.push(Degradation::new(Stage::Consolidation, &e));
                payload.clone().into_value()
            }
        };

        let data = site.process(data);

        info!(
            site = site_id,
            candidates = candidates.len(),
            degraded = degradations.len(),
            "Harvest finished"
        );

        Ok(Harvest {
            site_id: site_id.to_string(),
            query: query.into_string(),
            results,
            candidates,
            data,
            degradations,
        })
    }
}
