//! Mock brain implementations for the research pipeline.
//!
//! This crate provides deterministic implementations of the `Brain` trait:
//! - `StaticBrain` - Returns a fixed answer without calling tools
//! - `FailingBrain` - Always fails with a chosen error
//! - `ScriptedBrain` - Calls a fixed list of tools, then answers
//!
//! For real research, use the `claude-brain` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{AgentTask, Brain, ScriptedBrain, ToolExecutor, ToolRequest, ToolResult, ToolSpec};
//!
//! struct Upper;
//!
//! #[mock_brain::async_trait]
//! impl ToolExecutor for Upper {
//!     async fn execute(&self, request: ToolRequest) -> ToolResult {
//!         ToolResult::success(&request.id, request.input().to_uppercase())
//!     }
//!
//!     fn tool_specs(&self) -> Vec<ToolSpec> {
//!         Vec::new()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = ScriptedBrain::new("done").call("shout", "hello");
//!     let answer = brain.run(&AgentTask::new("", "q"), &Upper).await?;
//!     assert_eq!(answer.steps[0].observation, "HELLO");
//!     Ok(())
//! }
//! ```

mod scripted;
mod static_answer;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, AgentAnswer, AgentStep, AgentTask, Brain, BrainError, ToolExecutor, ToolRequest,
    ToolResult, ToolSpec,
};

pub use scripted::ScriptedBrain;
pub use static_answer::{FailingBrain, StaticBrain};
