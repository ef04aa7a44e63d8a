//! Anthropic Claude-based brain implementation.
//!
//! [`ClaudeBrain`] drives the research agent through the Messages API. It
//! advertises the tool menu from a [`ToolExecutor`], runs every requested
//! tool in order, feeds the observations back, and stops when the model
//! ends its turn or the iteration budget runs out.
//!
//! # Usage
//!
//! ```rust,no_run
//! use claude_brain::ClaudeBrain;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = ClaudeBrain::from_env()?;
//!     // Hand the brain to an orchestrator...
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::{ClaudeBrain, ITERATION_LIMIT_MESSAGE};
pub use config::{
    ClaudeBrainConfig, ClaudeBrainConfigBuilder, DEFAULT_API_URL, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, AgentAnswer, AgentTask, Brain, BrainError, ToolExecutor};
