//! Core data types shared across pipeline stages.

use serde::Serialize;
use serde_json::Value;

use crate::error::Degradation;

/// One search hit, in engine ranking order.
///
/// Serialized as-is into the relevance prompt, so the field names here are
/// the field names the model sees.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// Extraction output with an explicit empty sentinel.
///
/// The extraction service can legitimately produce nothing; downstream
/// stages need to tell that apart from real data without re-inspecting
/// the JSON each time.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No usable data (service failure, or an empty response)
    Empty,

    /// Non-empty structured data, schema defined by the service
    Data(Value),
}

impl Payload {
    /// Classify a raw extraction value.
    ///
    /// `null`, `{}`, `[]`, and `""` all count as empty.
    pub fn from_value(value: Value) -> Self {
        let empty = match &value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        };

        if empty {
            Payload::Empty
        } else {
            Payload::Data(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// Unwrap into a JSON value; the empty sentinel becomes `{}`.
    pub fn into_value(self) -> Value {
        match self {
            Payload::Empty => Value::Object(serde_json::Map::new()),
            Payload::Data(value) => value,
        }
    }
}

/// Everything a single collection run produced.
///
/// The terminal value of [`crate::pipeline::Pipeline::harvest`]: the
/// consolidated data plus enough context to tell how it was obtained and
/// which stages, if any, degraded along the way.
#[derive(Debug, Clone)]
pub struct Harvest {
    /// Site the run targeted
    pub site_id: String,

    /// Query sent to the search engine
    pub query: String,

    /// Raw search hits, engine order preserved
    pub results: Vec<SearchResult>,

    /// Collection URLs that survived relevance filtering
    pub candidates: Vec<String>,

    /// Consolidated extraction data (empty object when nothing was found)
    pub data: Value,

    /// Stage failures absorbed along the way
    pub degradations: Vec<Degradation>,
}

impl Harvest {
    /// True when every stage ran without degrading.
    pub fn is_clean(&self) -> bool {
        self.degradations.is_empty()
    }
}
