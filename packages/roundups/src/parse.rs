//! Layered parsing policy for language-model output.
//!
//! Model replies are expected to be JSON but are not guaranteed to be.
//! The layers, in order: (1) strict parse of the whole reply with code
//! fences stripped; (2) scan for the outermost `{`..`}` substring and
//! parse that; (3) give up and let the caller apply its fallback.
//! Relevance filtering stops at layer (1); consolidation uses all three.

use serde::de::DeserializeOwned;
use serde_json::Value;

use deepseek_client::strip_code_blocks;

/// Strict parse: the whole reply (minus code fences) must be valid JSON.
pub fn parse_json<T: DeserializeOwned>(response: &str) -> Option<T> {
    serde_json::from_str(strip_code_blocks(response)).ok()
}

/// Lenient parse: strict first, then the first-`{`-to-last-`}` substring.
pub fn parse_json_lenient(response: &str) -> Option<Value> {
    if let Some(value) = parse_json(response) {
        return Some(value);
    }

    let text = response.trim();
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str(&text[start..=end]).ok()
}
