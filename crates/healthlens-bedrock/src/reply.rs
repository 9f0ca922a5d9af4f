//! Cleaning and parsing of the model's reply text.

use healthlens_core::models::report::ReportInput;

use crate::error::BedrockError;

/// Strip Markdown code fences and surrounding prose from a model reply.
///
/// Models often wrap JSON in ```` ```json ```` fences or add a sentence
/// before or after it. The result is the span from the first `{` to the last
/// `}` when both exist, otherwise the trimmed, fence-free text.
pub fn clean_model_reply(raw: &str) -> &str {
    let text = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Parse a model reply into a `ReportInput`.
pub fn parse_report_reply(raw: &str) -> Result<ReportInput, BedrockError> {
    let cleaned = clean_model_reply(raw);
    if cleaned.is_empty() {
        return Err(BedrockError::ResponseParse("empty model reply".to_string()));
    }

    let value: serde_json::Value = serde_json::from_str(cleaned).map_err(|e| {
        BedrockError::ResponseParse(format!("reply is not valid JSON: {e}. Reply: {cleaned}"))
    })?;

    ReportInput::from_value(value).map_err(|e| {
        BedrockError::SchemaViolation(format!("failed to parse ReportInput: {e}. Reply: {cleaned}"))
    })
}
