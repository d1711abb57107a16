//! Prompt and response schema for prompt analysis

use serde_json::json;

const ANALYSIS_INSTRUCTIONS: &str =
    "Analyze the following coding prompt used in a Vibe Coding tool.\n\
     Extract a catchy title, a concise summary (max 2 sentences), \
     relevant technical tags (max 5), and a complexity score (1-10).";

/// Build the analysis instruction embedding `prompt_text`
pub fn build_analysis_prompt(prompt_text: &str) -> String {
    let mut prompt = String::with_capacity(ANALYSIS_INSTRUCTIONS.len() + prompt_text.len() + 16);
    prompt.push_str(ANALYSIS_INSTRUCTIONS);
    prompt.push_str("\n\nPrompt:\n");
    prompt.push_str(prompt_text);
    prompt
}

/// Structured-output schema for `AnalysisResult`
///
/// All four fields are required so that the service rejects non-conforming
/// replies before they reach the parser.
pub fn analysis_schema() -> String {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "complexityScore": { "type": "INTEGER" }
        },
        "required": ["title", "summary", "tags", "complexityScore"]
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_analysis_prompt("Build a todo app");
        assert!(prompt.starts_with("Analyze the following coding prompt"));
        assert!(prompt.ends_with("Prompt:\nBuild a todo app"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema: serde_json::Value = serde_json::from_str(&analysis_schema()).unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["title", "summary", "tags", "complexityScore"]);
        assert_eq!(schema["properties"]["complexityScore"]["type"], "INTEGER");
        assert_eq!(schema["properties"]["tags"]["items"]["type"], "STRING");
    }
}
