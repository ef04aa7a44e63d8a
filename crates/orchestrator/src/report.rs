//! The structured report the agent must answer with.
//!
//! The model is shown [`format_instructions`] in its system prompt and its
//! final answer is decoded with [`parse`]. Decoding is strict: all five
//! fields are required and unknown fields are rejected.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// A parsed research report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResearchResult {
    pub topic: String,
    pub summary: String,
    pub sources: Vec<String>,
    pub tools_used: Vec<String>,
    pub key_findings: Vec<String>,
}

/// The agent's answer did not match the report schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse research result: {message}")]
pub struct ParseError {
    /// The answer text exactly as the agent produced it.
    pub raw: String,
    /// Why strict decoding failed.
    pub message: String,
}

/// JSON schema of [`ResearchResult`].
pub fn schema() -> Value {
    let string_list = json!({"type": "array", "items": {"type": "string"}});
    json!({
        "title": "ResearchResult",
        "type": "object",
        "properties": {
            "topic": {"type": "string"},
            "summary": {"type": "string"},
            "sources": string_list,
            "tools_used": string_list,
            "key_findings": string_list,
        },
        "required": ["topic", "summary", "sources", "tools_used", "key_findings"],
        "additionalProperties": false,
    })
}

/// Output format text embedded in the system prompt.
pub fn format_instructions() -> String {
    format!(
        "The output should be formatted as a JSON instance that conforms to the JSON schema \
         below.\n\n\
         As an example, for the schema {{\"properties\": {{\"foo\": {{\"type\": \"array\", \
         \"items\": {{\"type\": \"string\"}}}}}}, \"required\": [\"foo\"]}}\n\
         the object {{\"foo\": [\"bar\", \"baz\"]}} is a well-formatted instance of the schema. \
         The object {{\"properties\": {{\"foo\": [\"bar\", \"baz\"]}}}} is not well-formatted.\n\n\
         Here is the output schema:\n```\n{}\n```",
        schema()
    )
}

/// Decode the agent's final answer.
///
/// The trimmed text is decoded first. If that fails and the text contains a
/// fenced code block, the block body is tried with the same strict rules.
/// On failure the error keeps `raw` unchanged and the first decoder message.
pub fn parse(raw: &str) -> Result<ResearchResult, ParseError> {
    let trimmed = raw.trim();

    let err = match serde_json::from_str::<ResearchResult>(trimmed) {
        Ok(result) => return Ok(result),
        Err(e) => e,
    };

    if let Some(body) = fenced_block(trimmed) {
        match serde_json::from_str::<ResearchResult>(body) {
            Ok(result) => return Ok(result),
            Err(e) => debug!("Fenced block did not decode either: {}", e),
        }
    }

    Err(ParseError {
        raw: raw.to_string(),
        message: err.to_string(),
    })
}

/// Body of the first ```-fenced block, without its language tag.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body_start = after_fence.find('\n').map(|i| i + 1)?;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "topic": "Solar power",
        "summary": "Cheap and growing.",
        "sources": ["https://example.com/solar"],
        "tools_used": ["search", "calculator"],
        "key_findings": ["Costs fell", "Capacity doubled"]
    }"#;

    fn expected() -> ResearchResult {
        ResearchResult {
            topic: "Solar power".to_string(),
            summary: "Cheap and growing.".to_string(),
            sources: vec!["https://example.com/solar".to_string()],
            tools_used: vec!["search".to_string(), "calculator".to_string()],
            key_findings: vec!["Costs fell".to_string(), "Capacity doubled".to_string()],
        }
    }

    #[test]
    fn test_parse_exact_instance() {
        assert_eq!(parse(VALID).unwrap(), expected());
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        let padded = format!("\n\n  {}  \n", VALID);
        assert_eq!(parse(&padded).unwrap(), expected());
    }

    #[test]
    fn test_parse_fenced_block() {
        let fenced = format!("Here is the report:\n```json\n{}\n```\nThanks!", VALID);
        assert_eq!(parse(&fenced).unwrap(), expected());

        let bare_fence = format!("```\n{}\n```", VALID);
        assert_eq!(parse(&bare_fence).unwrap(), expected());
    }

    #[test]
    fn test_parse_malformed_keeps_raw() {
        let raw = "  I could not finish the research.  ";
        let err = parse(raw).unwrap_err();
        assert_eq!(err.raw, raw);
        assert!(!err.message.is_empty());
        assert!(err.to_string().starts_with("Failed to parse research result:"));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let raw = VALID.replace("\"topic\"", "\"confidence\": 0.9, \"topic\"");
        let err = parse(&raw).unwrap_err();
        assert!(err.message.contains("confidence"));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let raw = r#"{"topic": "t", "summary": "s", "sources": [], "tools_used": []}"#;
        let err = parse(raw).unwrap_err();
        assert!(err.message.contains("key_findings"));
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        let raw = VALID.replace("\"Solar power\"", "42");
        assert!(parse(&raw).is_err());
    }

    #[test]
    fn test_parse_bad_fence_reports_outer_error() {
        let raw = "```json\n{\"topic\": 1}\n```";
        let err = parse(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn test_format_instructions_carry_schema() {
        let text = format_instructions();
        assert!(text.contains("\"additionalProperties\":false"));
        assert!(text.contains("\"key_findings\""));
        assert!(text.contains("JSON schema"));
    }

    #[test]
    fn test_schema_requires_every_field() {
        let schema = schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["topic", "summary", "sources", "tools_used", "key_findings"]
        );
        assert_eq!(schema["properties"]["sources"]["items"]["type"], "string");
    }

    #[test]
    fn test_fenced_block_helper() {
        assert_eq!(fenced_block("```json\n{}\n```"), Some("{}"));
        assert_eq!(fenced_block("no fence"), None);
        assert_eq!(fenced_block("```json\n{} unterminated"), None);
    }
}
