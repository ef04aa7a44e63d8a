//! Tool execution support for Brain implementations.
//!
//! Every tool in the research toolbelt takes one string and returns one
//! string. This module provides the types a brain uses to discover the tool
//! menu and to request executions, without knowing how tools are implemented.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Argument key under which a tool's single string input is passed.
pub const INPUT_KEY: &str = "input";

/// One entry of the tool menu shown to a brain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Stable tool name used for dispatch.
    pub name: String,
    /// What the tool does, for the model's tool selection.
    pub description: String,
    /// What the single string argument should contain.
    pub input_description: String,
}

impl ToolSpec {
    /// Create a new tool spec.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_description: input_description.into(),
        }
    }

    /// JSON schema of the tool's arguments: one required string field.
    pub fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                INPUT_KEY: {
                    "type": "string",
                    "description": self.input_description,
                }
            },
            "required": [INPUT_KEY],
        })
    }
}

/// Result of a tool execution.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The tool call ID this result corresponds to.
    pub tool_call_id: String,
    /// The result content (will be sent back to the model).
    pub content: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed tool result. The content is passed through as-is so
    /// that tools keep control over their own error wording.
    pub fn error(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: false,
        }
    }
}

/// A request to execute a tool.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// Unique ID for this tool call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments as a JSON object.
    pub arguments: HashMap<String, Value>,
}

impl ToolRequest {
    /// Build a request carrying a single string input.
    pub fn with_input(id: impl Into<String>, name: impl Into<String>, input: &str) -> Self {
        let mut arguments = HashMap::new();
        arguments.insert(INPUT_KEY.to_string(), Value::String(input.to_string()));
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Build a request from a JSON arguments value as emitted by a model.
    ///
    /// Non-object values are kept under the input key when they are strings
    /// and dropped otherwise.
    pub fn from_value(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map.into_iter().collect(),
            Value::String(s) => {
                let mut map = HashMap::new();
                map.insert(INPUT_KEY.to_string(), Value::String(s));
                map
            }
            _ => HashMap::new(),
        };
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Get a string argument by name.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// The tool's single string input.
    ///
    /// Prefers the `input` key; models sometimes rename it, so any other
    /// string argument is accepted next. Missing input is an empty string,
    /// which every tool handles on its own terms.
    pub fn input(&self) -> &str {
        if let Some(input) = self.get_string(INPUT_KEY) {
            return input;
        }
        let mut keys: Vec<&String> = self.arguments.keys().collect();
        keys.sort();
        keys.into_iter()
            .find_map(|k| self.arguments.get(k).and_then(|v| v.as_str()))
            .unwrap_or("")
    }
}

/// Trait for executing tools called by a Brain.
///
/// Implementations must be total: every request yields a [`ToolResult`],
/// with failures reported in its content rather than as an error.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    async fn execute(&self, request: ToolRequest) -> ToolResult;

    /// The tool menu, in a stable order.
    fn tool_specs(&self) -> Vec<ToolSpec>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("call-123", "Some data");
        assert!(result.success);
        assert_eq!(result.tool_call_id, "call-123");
        assert_eq!(result.content, "Some data");
    }

    #[test]
    fn test_tool_result_error_keeps_content() {
        let result = ToolResult::error("call-456", "❌ Something went wrong");
        assert!(!result.success);
        assert_eq!(result.content, "❌ Something went wrong");
    }

    #[test]
    fn test_request_input_key() {
        let request = ToolRequest::with_input("id-1", "search", "latest news");
        assert_eq!(request.name, "search");
        assert_eq!(request.input(), "latest news");
    }

    #[test]
    fn test_request_input_falls_back_to_other_string() {
        let request = ToolRequest::from_value(
            "id-1",
            "calculator",
            json!({"expression": "2+2", "count": 3}),
        );
        assert_eq!(request.input(), "2+2");
    }

    #[test]
    fn test_request_input_from_bare_string() {
        let request = ToolRequest::from_value("id-1", "file_reader", json!("notes.txt"));
        assert_eq!(request.input(), "notes.txt");
    }

    #[test]
    fn test_request_input_missing_is_empty() {
        let request = ToolRequest::from_value("id-1", "datetime", json!({}));
        assert_eq!(request.input(), "");
        assert!(request.get_string("input").is_none());
    }

    #[test]
    fn test_input_schema_requires_input() {
        let spec = ToolSpec::new("search", "Search the web", "The search query");
        let schema = spec.input_schema();
        assert_eq!(schema["required"][0], "input");
        assert_eq!(schema["properties"]["input"]["type"], "string");
        assert_eq!(
            schema["properties"]["input"]["description"],
            "The search query"
        );
    }
}
