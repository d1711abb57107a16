//! Parse LLM output into an analysis result

use crate::error::EnrichError;
use vibe_domain::AnalysisResult;

/// Parse an LLM reply into an [`AnalysisResult`]
///
/// The reply must be a JSON object with `title`, `summary`, `tags` and an
/// integer `complexityScore` between 1 and 10. A surrounding Markdown code
/// fence is tolerated; anything else is an [`EnrichError::AnalysisParse`].
pub fn parse_analysis(response: &str) -> Result<AnalysisResult, EnrichError> {
    let json_str = extract_json(response)?;
    let result: AnalysisResult = serde_json::from_str(json_str)?;

    if !result.has_valid_score() {
        return Err(EnrichError::AnalysisParse(format!(
            "complexityScore {} is outside 1-10",
            result.complexity_score
        )));
    }

    Ok(result)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, EnrichError> {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") {
        return Ok(trimmed);
    }

    // Skip the opening fence line (```json or ```) and the closing fence
    let body = trimmed
        .split_once('\n')
        .map(|(_, rest)| rest)
        .ok_or_else(|| EnrichError::AnalysisParse("Empty code block".to_string()))?;
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    Ok(body.trim())
}
