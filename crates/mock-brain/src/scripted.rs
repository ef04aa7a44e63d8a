//! Scripted brain implementation - replays a fixed plan of tool calls.

use async_trait::async_trait;
use brain_core::{AgentAnswer, AgentStep, AgentTask, Brain, BrainError, ToolExecutor, ToolRequest};

/// A brain that calls a fixed list of tools in order, then answers.
///
/// Every call goes through the real executor, so the recorded steps carry
/// genuine observations. Use `{query}` in the answer template to echo the
/// task's query back.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBrain {
    calls: Vec<(String, String)>,
    answer: String,
}

impl ScriptedBrain {
    /// Create a brain with no tool calls and the given answer template.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            answer: answer.into(),
        }
    }

    /// Append a tool call to the plan.
    pub fn call(mut self, tool: impl Into<String>, input: impl Into<String>) -> Self {
        self.calls.push((tool.into(), input.into()));
        self
    }
}

#[async_trait]
impl Brain for ScriptedBrain {
    async fn run(
        &self,
        task: &AgentTask,
        tools: &dyn ToolExecutor,
    ) -> Result<AgentAnswer, BrainError> {
        let mut steps = Vec::with_capacity(self.calls.len());

        for (index, (tool, input)) in self.calls.iter().enumerate() {
            let request = ToolRequest::with_input(format!("script_{}", index), tool, input);
            let result = tools.execute(request).await;
            steps.push(AgentStep {
                tool: tool.clone(),
                input: input.clone(),
                observation: result.content,
            });
        }

        let output = self.answer.replace("{query}", &task.query);
        Ok(AgentAnswer::new(output).with_steps(steps))
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }
}
