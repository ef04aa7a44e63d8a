//! ToolExecutor implementation backed by ToolRegistry.

use std::sync::Arc;

use brain_core::{ToolExecutor, ToolRequest, ToolResult, ToolSpec};
use tracing::{debug, warn};

use crate::registry::ToolRegistry;

/// Exposes a [`ToolRegistry`] to brains through the [`ToolExecutor`] seam.
///
/// Each request's single string argument is taken from
/// [`ToolRequest::input`]. The result is always produced; failures carry
/// the tool's own `❌` description with `success = false`.
#[derive(Clone)]
pub struct RegistryToolExecutor {
    registry: Arc<ToolRegistry>,
}

impl RegistryToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    pub fn from_shared(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.registry.as_ref()
    }
}

#[async_trait::async_trait]
impl ToolExecutor for RegistryToolExecutor {
    async fn execute(&self, request: ToolRequest) -> ToolResult {
        let tool = match self.registry.get(&request.name) {
            Ok(tool) => tool,
            Err(e) => {
                warn!("Brain requested unknown tool '{}'", request.name);
                return ToolResult::error(&request.id, e.render("Tool error"));
            }
        };

        let input = request.input();
        debug!("Executing '{}' for call {}", request.name, request.id);

        match tool.execute(input).await {
            Ok(output) => ToolResult::success(&request.id, output),
            Err(e) => {
                debug!("Tool '{}' failed: {}", request.name, e);
                ToolResult::error(&request.id, e.render(tool.error_context()))
            }
        }
    }

    fn tool_specs(&self) -> Vec<ToolSpec> {
        self.registry.specs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use serde_json::json;

    fn executor() -> RegistryToolExecutor {
        let config = ToolsConfig::builder()
            .search_api_url("http://127.0.0.1:9/")
            .wikipedia_api_url("http://127.0.0.1:9/w/api.php")
            .build();
        RegistryToolExecutor::new(ToolRegistry::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_execute_success() {
        let request = ToolRequest::with_input("call_1", "calculator", "6 * 7");
        let result = executor().execute(request).await;
        assert!(result.success);
        assert_eq!(result.tool_call_id, "call_1");
        assert_eq!(result.content, "Result: 42");
    }

    #[tokio::test]
    async fn test_execute_tool_failure_keeps_message() {
        let request = ToolRequest::with_input("call_2", "calculator", "1/0");
        let result = executor().execute(request).await;
        assert!(!result.success);
        assert!(result.content.starts_with("❌ Calculation error: division by zero"));
    }

    #[tokio::test]
    async fn test_execute_renamed_argument() {
        let request = ToolRequest::from_value("call_3", "calculator", json!({"expression": "2^5"}));
        let result = executor().execute(request).await;
        assert_eq!(result.content, "Result: 32");
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let request = ToolRequest::with_input("call_4", "rm_rf", "/");
        let result = executor().execute(request).await;
        assert!(!result.success);
        assert_eq!(result.content, "❌ Tool not found: rm_rf");
    }

    #[test]
    fn test_specs() {
        let specs = executor().tool_specs();
        assert_eq!(specs.first().map(|s| s.name.as_str()), Some("search"));
        assert_eq!(specs.last().map(|s| s.name.as_str()), Some("save_text_to_file"));
    }
}
