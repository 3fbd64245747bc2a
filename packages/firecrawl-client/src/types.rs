use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /extract`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub prompt: String,
    #[serde(rename = "enableWebSearch")]
    pub enable_web_search: bool,
}

/// Response to starting an extract job.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractStartResponse {
    pub success: bool,
    pub id: Option<String>,
}

/// Status of a running or finished extract job.
///
/// `status` is one of "processing", "completed", "failed", "cancelled".
/// `data` is whatever shape the extraction prompt produced, so it stays an
/// untyped [`Value`].
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractStatusResponse {
    pub status: String,
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}
