//! The Brain trait definition.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::task::{AgentAnswer, AgentTask};
use crate::tools::ToolExecutor;

/// A strategy that turns a research task into a raw final answer.
///
/// Implementations decide which tools to call, in which order, and when to
/// stop. They range from scripted test doubles to a full LLM tool-calling
/// loop. This trait is object-safe and can be used with `Box<dyn Brain>`.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Work on a task, calling tools through `tools`, and return the final answer.
    ///
    /// # Arguments
    ///
    /// * `task` - System instructions and the user's query.
    /// * `tools` - Executor for the tool menu the brain may use.
    ///
    /// # Returns
    ///
    /// The raw final answer text plus the tool steps taken, or an error if
    /// the brain itself failed (tool failures are observations, not errors).
    async fn run(
        &self,
        task: &AgentTask,
        tools: &dyn ToolExecutor,
    ) -> Result<AgentAnswer, BrainError>;

    /// Get a human-readable name for this brain implementation.
    fn name(&self) -> &str;

    /// Check if the brain is ready to work.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
