//! Task and answer types exchanged with a brain.

use serde::{Deserialize, Serialize};

/// A unit of work handed to a brain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTask {
    /// System instructions (role, tool menu, output format).
    pub instructions: String,
    /// The user's research query.
    pub query: String,
}

impl AgentTask {
    /// Create a task from instructions and a query.
    pub fn new(instructions: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            query: query.into(),
        }
    }
}

/// One tool call made while working on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStep {
    /// Tool name the brain invoked.
    pub tool: String,
    /// The single string argument passed to the tool.
    pub input: String,
    /// What the tool returned.
    pub observation: String,
}

/// The outcome of a brain run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentAnswer {
    /// Raw final answer text, expected to follow the structured-output contract.
    pub output: String,
    /// Tool calls in the order they were made.
    pub steps: Vec<AgentStep>,
}

impl AgentAnswer {
    /// Create an answer with no recorded steps.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            steps: Vec::new(),
        }
    }

    /// Attach the recorded tool steps.
    pub fn with_steps(mut self, steps: Vec<AgentStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Distinct tool names in first-use order.
    pub fn tools_called(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for step in &self.steps {
            if !seen.contains(&step.tool.as_str()) {
                seen.push(step.tool.as_str());
            }
        }
        seen
    }
}
