//! Prompts for the two language-model passes.
//!
//! The relevance pass classifies search hits; the consolidation pass
//! deduplicates extracted data. Both expect JSON back, parsed under the
//! policy in [`crate::parse`].

/// System instruction for the relevance pass.
pub const RELEVANCE_SYSTEM_PROMPT: &str = "Identify URLs that are **curated \
lists/collections of food reviews** (e.g., 'Top 10 Restaurants in X,' 'Best \
Dishes of 2024').";

/// User prompt for the relevance pass, with worked examples.
pub const RELEVANCE_PROMPT: &str = r#"**Objective**: Find URLs that are **collections/roundups of food reviews** (e.g., ranked lists, aggregated guides).
**Avoid**: Single-restaurant reviews, recipe blogs, or social media links.

**SERP Examples**:
**Good**:
- Title: "Top 50 Restaurants in Paris 2024 | Food Magazine"
- Snippet: "Our annual ranked list of the finest dining spots."
- URL: `https://foodmag.com/best-paris-restaurants` → **Include as-is**
- Title: "Best Pizza in NYC"
- Snippet: "A curated guide to 20 iconic pizzerias."
- URL: `https://foodmag.com` → **Add /*** (if the list isn't on the homepage)
**Bad**:
- Title: "10 Easy Pasta Recipes"
- URL: `https://recipes.com/pasta` → **Exclude** (not a review collection)

**SERP Results**:
{serp_results}

Return a JSON object with **only** valid collections under `selected_urls`:"#;

/// System instruction for the consolidation pass.
pub const CONSOLIDATION_SYSTEM_PROMPT: &str = "You are an expert at consolidating \
information and removing duplicates. Analyze the extracted data and provide a \
clean, consolidated response.";

/// User prompt for the consolidation pass.
pub const CONSOLIDATION_PROMPT: &str = r#"Company: {company}
Objective: {objective}
Extracted Data: {data}

Please analyze this data and:
1. Remove any duplicate information
2. Consolidate similar points
3. Format the response as a clean JSON object
4. Ensure all information is relevant to the objective
Return only the JSON response."#;

/// Format the relevance prompt with serialized search results.
pub fn format_relevance_prompt(serp_results: &str) -> String {
    RELEVANCE_PROMPT.replace("{serp_results}", serp_results)
}

/// Format the consolidation prompt.
pub fn format_consolidation_prompt(company: &str, objective: &str, data: &str) -> String {
    CONSOLIDATION_PROMPT
        .replace("{company}", company)
        .replace("{objective}", objective)
        .replace("{data}", data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_relevance_prompt() {
        let prompt = format_relevance_prompt(r#"[{"title": "Best Pizza"}]"#);

        assert!(prompt.contains(r#"[{"title": "Best Pizza"}]"#));
        assert!(prompt.contains("`selected_urls`"));
        assert!(!prompt.contains("{serp_results}"));
    }

    #[test]
    fn test_format_consolidation_prompt() {
        let prompt = format_consolidation_prompt(
            "eater.com",
            "Extract every restaurant",
            r#"{"restaurants": []}"#,
        );

        assert!(prompt.contains("Company: eater.com"));
        assert!(prompt.contains("Objective: Extract every restaurant"));
        assert!(prompt.contains(r#"Extracted Data: {"restaurants": []}"#));
        assert!(prompt.contains("Return only the JSON response."));
    }
}
