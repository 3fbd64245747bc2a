//! Consolidation: deduplicate and normalize extracted data.
//!
//! The second language-model pass. Unlike relevance filtering, parsing
//! here is lenient (all three layers of [`crate::parse`]): previously
//! extracted data is at stake, so every chance to salvage a reply is
//! taken before the caller falls back to the unconsolidated payload.

use serde_json::Value;
use tracing::info;

use crate::error::{Result, RoundupError};
use crate::parse::parse_json_lenient;
use crate::prompts::{format_consolidation_prompt, CONSOLIDATION_SYSTEM_PROMPT};
use crate::traits::ChatModel;
use crate::types::Payload;

/// Ask the model to deduplicate and consolidate extracted data.
///
/// An empty payload short-circuits to an empty object without a model
/// call. A reply with no salvageable JSON is a
/// [`RoundupError::ConsolidationParse`]; the caller decides whether to
/// fall back to the original payload.
pub async fn deduplicate(
    model: &dyn ChatModel,
    payload: &Payload,
    company: &str,
    objective: &str,
) -> Result<Value> {
    let data = match payload {
        Payload::Empty => {
            info!("No extracted data, skipping consolidation");
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Payload::Data(data) => data,
    };

    let serialized = serde_json::to_string_pretty(data)
        .map_err(|e| RoundupError::Completion(Box::new(e)))?;

    info!(company, "Consolidating extracted data");

    let prompt = format_consolidation_prompt(company, objective, &serialized);
    let reply = model.complete(CONSOLIDATION_SYSTEM_PROMPT, &prompt).await?;

    parse_json_lenient(&reply).ok_or_else(|| {
        RoundupError::ConsolidationParse("no JSON object in consolidation reply".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;
    use serde_json::json;

    fn sample_payload() -> Payload {
        Payload::Data(json!({
            "restaurants": [
                {"name": "Matt's Bar", "dish": "Jucy Lucy"},
                {"name": "Matt's Bar", "dish": "Jucy Lucy"},
                {"name": "Al's Breakfast", "dish": "pancakes"}
            ]
        }))
    }

    #[tokio::test]
    async fn test_empty_payload_short_circuits() {
        let model = MockModel::new();

        let result = deduplicate(&model, &Payload::Empty, "eater.com", "objective")
            .await
            .unwrap();

        assert_eq!(result, json!({}));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_consolidates_clean_reply() {
        let model = MockModel::new().with_response(
            r#"{"restaurants": [{"name": "Matt's Bar"}, {"name": "Al's Breakfast"}]}"#,
        );

        let result = deduplicate(&model, &sample_payload(), "eater.com", "objective")
            .await
            .unwrap();

        assert_eq!(result["restaurants"][1]["name"], "Al's Breakfast");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_salvages_json_wrapped_in_prose() {
        let model = MockModel::new().with_response("Here you go: {\"a\":1} thanks");

        let result = deduplicate(&model, &sample_payload(), "eater.com", "objective")
            .await
            .unwrap();

        assert_eq!(result, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_unsalvageable_reply_is_parse_error() {
        let model = MockModel::new().with_response("I could not make sense of that data.");

        let err = deduplicate(&model, &sample_payload(), "eater.com", "objective")
            .await
            .unwrap_err();

        assert!(matches!(err, RoundupError::ConsolidationParse(_)));
    }

    #[tokio::test]
    async fn test_prompt_carries_company_objective_and_data() {
        let model = MockModel::new().with_response("{}");

        deduplicate(
            &model,
            &sample_payload(),
            "eater.com",
            "Extract every restaurant",
        )
        .await
        .unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system.contains("consolidating"));
        assert!(calls[0].user.contains("Company: eater.com"));
        assert!(calls[0].user.contains("Objective: Extract every restaurant"));
        assert!(calls[0].user.contains("Matt's Bar"));
    }
}
