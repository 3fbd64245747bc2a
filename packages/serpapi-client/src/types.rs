use serde::Deserialize;

/// Top-level SerpAPI search response. Only the organic results are kept;
/// ads, knowledge panels, and pagination metadata are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

/// A single organic search result. SerpAPI omits fields freely, so every
/// field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "search_metadata": { "status": "Success" },
            "organic_results": [
                {
                    "position": 1,
                    "title": "The 38 Best Restaurants in Minneapolis",
                    "link": "https://www.eater.com/maps/best-restaurants-minneapolis",
                    "snippet": "Where to eat right now."
                },
                {
                    "position": 2,
                    "title": "A result with no link"
                }
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.organic_results.len(), 2);

        let first = &resp.organic_results[0];
        assert_eq!(
            first.link.as_deref(),
            Some("https://www.eater.com/maps/best-restaurants-minneapolis")
        );
        assert_eq!(
            first.title.as_deref(),
            Some("The 38 Best Restaurants in Minneapolis")
        );

        let second = &resp.organic_results[1];
        assert!(second.link.is_none());
        assert!(second.snippet.is_none());
    }

    #[test]
    fn test_parse_missing_organic_results() {
        let json = r#"{ "search_metadata": { "status": "Success" } }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(resp.organic_results.is_empty());
    }
}
