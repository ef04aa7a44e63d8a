//! Tool trait definition.

use async_trait::async_trait;
use brain_core::ToolSpec;
use tracing::debug;

use crate::error::ToolError;

/// A capability the agent can call: one string in, one string out.
///
/// Implementors report failures through [`Tool::execute`]. Callers should
/// go through [`Tool::invoke`], which never fails and turns every error into
/// a `❌`-prefixed description.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// What the single string argument should contain.
    fn input_description(&self) -> &str;

    /// Phrase naming the operation in rendered failures.
    fn error_context(&self) -> &str {
        "Tool error"
    }

    /// Run the tool.
    async fn execute(&self, input: &str) -> Result<String, ToolError>;

    /// Run the tool, rendering any failure as a descriptive string.
    async fn invoke(&self, input: &str) -> String {
        match self.execute(input).await {
            Ok(output) => output,
            Err(e) => {
                debug!("Tool '{}' failed: {}", self.name(), e);
                e.render(self.error_context())
            }
        }
    }

    /// The menu entry shown to a brain.
    fn spec(&self) -> ToolSpec {
        ToolSpec::new(self.name(), self.description(), self.input_description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flaky;

    #[async_trait]
    impl Tool for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        fn description(&self) -> &str {
            "Fails on empty input"
        }

        fn input_description(&self) -> &str {
            "anything"
        }

        fn error_context(&self) -> &str {
            "Error being flaky"
        }

        async fn execute(&self, input: &str) -> Result<String, ToolError> {
            if input.is_empty() {
                return Err(ToolError::InvalidInput("nothing to do".to_string()));
            }
            Ok(input.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_invoke_passes_output_through() {
        assert_eq!(Flaky.invoke("ok").await, "OK");
    }

    #[tokio::test]
    async fn test_invoke_renders_errors() {
        assert_eq!(Flaky.invoke("").await, "❌ Error being flaky: nothing to do");
    }

    #[test]
    fn test_spec_from_metadata() {
        let spec = Flaky.spec();
        assert_eq!(spec.name, "flaky");
        assert_eq!(spec.description, "Fails on empty input");
        assert_eq!(spec.input_description, "anything");
    }
}
