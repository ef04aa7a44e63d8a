//! Core trait and types for research agent brains.
//!
//! This crate provides the narrow seam between the research pipeline and
//! whatever drives tool selection. It defines:
//!
//! - [`Brain`] - The agent strategy: given a task and a tool executor, produce
//!   the raw final answer text
//! - [`AgentTask`] / [`AgentAnswer`] - Input and output of a brain run
//! - [`BrainError`] - Error types for brain operations
//! - [`ToolExecutor`] - Trait the brain calls to run a named tool
//!
//! # Example
//!
//! ```rust
//! use brain_core::{AgentAnswer, AgentTask, Brain, BrainError, ToolExecutor};
//! use async_trait::async_trait;
//!
//! struct ConstantBrain;
//!
//! #[async_trait]
//! impl Brain for ConstantBrain {
//!     async fn run(
//!         &self,
//!         _task: &AgentTask,
//!         _tools: &dyn ToolExecutor,
//!     ) -> Result<AgentAnswer, BrainError> {
//!         Ok(AgentAnswer::new("{}"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ConstantBrain"
//!     }
//! }
//! ```

mod error;
mod prompt;
mod task;
mod tools;
mod trait_def;

pub use error::BrainError;
pub use prompt::hash_prompt;
pub use task::{AgentAnswer, AgentStep, AgentTask};
pub use tools::{ToolExecutor, ToolRequest, ToolResult, ToolSpec, INPUT_KEY};
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
