//! Relevance filtering: which search hits are genuine review collections.
//!
//! A single completion call classifies the whole SERP at once. The
//! filter's accuracy is bounded by the model's judgment; what this module
//! owns is robustness to malformed replies.

use serde::Deserialize;
use tracing::{debug, info};

use deepseek_client::truncate_to_char_boundary;

use crate::error::{Result, RoundupError};
use crate::parse::parse_json;
use crate::prompts::{format_relevance_prompt, RELEVANCE_SYSTEM_PROMPT};
use crate::traits::ChatModel;
use crate::types::SearchResult;

/// Expected reply shape.
#[derive(Debug, Deserialize)]
struct UrlSelection {
    selected_urls: Vec<String>,
}

/// Ask the model which results are curated review collections.
///
/// Returns the selected URLs in the model's order. The reply must parse
/// strictly as a JSON object with a `selected_urls` array; anything else
/// is a [`RoundupError::ClassificationParse`]. An empty result list
/// short-circuits without a model call.
pub async fn select_collection_urls(
    model: &dyn ChatModel,
    results: &[SearchResult],
) -> Result<Vec<String>> {
    if results.is_empty() {
        return Ok(Vec::new());
    }

    let serialized = serde_json::to_string_pretty(results)
        .map_err(|e| RoundupError::Completion(Box::new(e)))?;

    info!(count = results.len(), "Selecting collection URLs");

    let prompt = format_relevance_prompt(&serialized);
    let reply = model.complete(RELEVANCE_SYSTEM_PROMPT, &prompt).await?;

    let selection: UrlSelection = parse_json(&reply).ok_or_else(|| {
        RoundupError::ClassificationParse(format!(
            "expected a selected_urls object, got: {}",
            summarize(&reply)
        ))
    })?;

    debug!(
        selected = selection.selected_urls.len(),
        "Model selected collection URLs"
    );

    Ok(selection.selected_urls)
}

/// First line of a reply, truncated, for error messages.
fn summarize(reply: &str) -> &str {
    let first_line = reply.lines().next().unwrap_or("");
    truncate_to_char_boundary(first_line, 120)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    fn sample_results() -> Vec<SearchResult> {
        vec![
            SearchResult::new(
                "The 38 Best Restaurants in Minneapolis",
                "https://www.eater.com/maps/best-restaurants-minneapolis",
                "Where to eat right now.",
            ),
            SearchResult::new(
                "Review: One great diner",
                "https://www.eater.com/reviews/one-diner",
                "A single-restaurant review.",
            ),
        ]
    }

    #[tokio::test]
    async fn test_selects_urls_in_model_order() {
        let model = MockModel::new()
            .with_response(r#"{"selected_urls": ["https://a.com", "https://b.com"]}"#);

        let urls = select_collection_urls(&model, &sample_results())
            .await
            .unwrap();

        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn test_prompt_carries_serialized_results() {
        let model = MockModel::new().with_response(r#"{"selected_urls": []}"#);

        select_collection_urls(&model, &sample_results())
            .await
            .unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system.contains("curated"));
        assert!(calls[0]
            .user
            .contains("https://www.eater.com/maps/best-restaurants-minneapolis"));
        assert!(calls[0].user.contains("selected_urls"));
    }

    #[tokio::test]
    async fn test_prose_reply_is_parse_error() {
        let model = MockModel::new()
            .with_response("Sure! I would recommend the first and third links.");

        let err = select_collection_urls(&model, &sample_results())
            .await
            .unwrap_err();

        assert!(matches!(err, RoundupError::ClassificationParse(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_parse_error() {
        let model = MockModel::new().with_response(r#"{"urls": ["https://a.com"]}"#);

        let err = select_collection_urls(&model, &sample_results())
            .await
            .unwrap_err();

        assert!(matches!(err, RoundupError::ClassificationParse(_)));
    }

    #[tokio::test]
    async fn test_code_fenced_reply_parses() {
        let model =
            MockModel::new().with_response("```json\n{\"selected_urls\": [\"https://a.com\"]}\n```");

        let urls = select_collection_urls(&model, &sample_results())
            .await
            .unwrap();

        assert_eq!(urls, vec!["https://a.com"]);
    }

    #[tokio::test]
    async fn test_empty_results_skip_model() {
        let model = MockModel::new();

        let urls = select_collection_urls(&model, &[]).await.unwrap();

        assert!(urls.is_empty());
        assert_eq!(model.call_count(), 0);
    }
}
