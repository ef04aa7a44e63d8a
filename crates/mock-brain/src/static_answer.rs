//! Brains that answer without calling tools.

use async_trait::async_trait;
use brain_core::{AgentAnswer, AgentTask, Brain, BrainError, ToolExecutor};

/// A brain that returns the same answer for every task.
///
/// Useful for testing answer parsing and rendering without any tool traffic.
#[derive(Debug, Clone, Default)]
pub struct StaticBrain {
    answer: String,
}

impl StaticBrain {
    /// Create a brain that always answers with `answer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::StaticBrain;
    ///
    /// let brain = StaticBrain::new(r#"{"topic": "Rust"}"#);
    /// ```
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

#[async_trait]
impl Brain for StaticBrain {
    async fn run(
        &self,
        _task: &AgentTask,
        _tools: &dyn ToolExecutor,
    ) -> Result<AgentAnswer, BrainError> {
        Ok(AgentAnswer::new(self.answer.clone()))
    }

    fn name(&self) -> &str {
        "StaticBrain"
    }
}

/// A brain whose every run fails.
#[derive(Debug, Clone)]
pub struct FailingBrain {
    message: String,
}

impl FailingBrain {
    /// Fail every run with `BrainError::Unavailable(message)`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn run(
        &self,
        _task: &AgentTask,
        _tools: &dyn ToolExecutor,
    ) -> Result<AgentAnswer, BrainError> {
        Err(BrainError::Unavailable(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::EchoExecutor;

    #[tokio::test]
    async fn test_static_answer() {
        let brain = StaticBrain::new("fixed");
        let task = AgentTask::new("instructions", "anything");

        let answer = brain.run(&task, &EchoExecutor).await.unwrap();
        assert_eq!(answer.output, "fixed");
        assert!(answer.steps.is_empty());
        assert_eq!(brain.name(), "StaticBrain");
        assert!(brain.is_ready().await);
    }

    #[tokio::test]
    async fn test_failing_brain() {
        let brain = FailingBrain::new("offline");
        let task = AgentTask::new("", "q");

        let err = brain.run(&task, &EchoExecutor).await.unwrap_err();
        assert_eq!(err.to_string(), "brain unavailable: offline");
        assert!(!brain.is_ready().await);
    }
}
