//! Error types for brain operations.

use thiserror::Error;

/// Errors that can occur while a brain works on a task.
#[derive(Debug, Error)]
pub enum BrainError {
    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The model backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The model backend answered, but the answer could not be used.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The brain is temporarily unavailable.
    #[error("brain unavailable: {0}")]
    Unavailable(String),
}
