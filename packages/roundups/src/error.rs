//! Typed errors for the roundup pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Only [`RoundupError::UnknownSite`] aborts a run. Every other variant is
//! a stage failure the pipeline absorbs: it is logged, recorded as a
//! [`Degradation`] on the harvest, and the run continues with an empty or
//! passthrough value.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while collecting roundups.
#[derive(Debug, Error)]
pub enum RoundupError {
    /// Site identifier has no registry entry (fatal)
    #[error("unknown site: {id}")]
    UnknownSite { id: String },

    /// Search service unavailable or failed
    #[error("search error: {0}")]
    SearchUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Chat completion call failed
    #[error("completion error: {0}")]
    Completion(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Relevance reply was not the expected structured output
    #[error("classification parse error: {0}")]
    ClassificationParse(String),

    /// Extraction service failed
    #[error("extraction error: {0}")]
    Extraction(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Consolidation reply could not be parsed at all
    #[error("consolidation parse error: {0}")]
    ConsolidationParse(String),
}

/// Result type alias for roundup operations.
pub type Result<T> = std::result::Result<T, RoundupError>;

/// Pipeline stage names, used to attribute degradations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Search,
    Relevance,
    Extraction,
    Consolidation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Search => "search",
            Stage::Relevance => "relevance",
            Stage::Extraction => "extraction",
            Stage::Consolidation => "consolidation",
        };
        write!(f, "{}", name)
    }
}

/// A stage failure the pipeline absorbed instead of aborting.
///
/// Lets callers distinguish "succeeded with empty data" from "a stage
/// failed along the way".
#[derive(Debug, Clone, Serialize)]
pub struct Degradation {
    /// Stage that degraded
    pub stage: Stage,

    /// Underlying error text
    pub detail: String,
}

impl Degradation {
    pub fn new(stage: Stage, error: &RoundupError) -> Self {
        Self {
            stage,
            detail: error.to_string(),
        }
    }
}

impl std::fmt::Display for Degradation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} degraded: {}", self.stage, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degradation_display() {
        let err = RoundupError::ClassificationParse("expected selected_urls".into());
        let degradation = Degradation::new(Stage::Relevance, &err);

        assert_eq!(degradation.stage, Stage::Relevance);
        assert_eq!(
            degradation.to_string(),
            "relevance degraded: classification parse error: expected selected_urls"
        );
    }

    #[test]
    fn test_stage_serializes_snake_case() {
        let json = serde_json::to_value(Stage::Consolidation).unwrap();
        assert_eq!(json, "consolidation");
    }
}
