//! Error types for orchestrator operations.

use brain_core::BrainError;
use research_tools::ToolError;
use thiserror::Error;

/// Errors that can occur while running a research query.
///
/// A report that fails to parse is not an error here; see
/// [`ResearchOutcome`](crate::ResearchOutcome).
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The query was empty or whitespace.
    #[error("query is empty")]
    EmptyQuery,

    /// Brain processing failed.
    #[error(transparent)]
    Brain(#[from] BrainError),

    /// Tool setup or the save step failed.
    #[error(transparent)]
    Tools(#[from] ToolError),
}
