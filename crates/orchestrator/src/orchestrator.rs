//! Research orchestrator that wires a brain to the tool registry.

use brain_core::{AgentAnswer, AgentTask, Brain, ToolExecutor};
use claude_brain::ClaudeBrain;
use research_tools::{RegistryToolExecutor, ToolRegistry, ToolsConfig};
use tracing::{debug, info, warn};

use crate::error::OrchestratorError;
use crate::formatting::render_save_payload;
use crate::prompt::build_system_prompt;
use crate::report::{parse, ParseError, ResearchResult};

/// What one research query produced.
#[derive(Debug, Clone)]
pub struct ResearchOutcome {
    /// The brain's raw answer and the tool steps it took.
    pub answer: AgentAnswer,
    /// The decoded report, or why the answer did not match the schema.
    pub report: Result<ResearchResult, ParseError>,
}

/// Runs one query at a time through a brain with the full tool menu.
///
/// The system prompt is built once, from the registry's menu, when the
/// orchestrator is created.
pub struct ResearchOrchestrator {
    brain: Box<dyn Brain>,
    tools: RegistryToolExecutor,
    instructions: String,
}

impl ResearchOrchestrator {
    /// Create an orchestrator from a brain and a tool registry.
    pub fn new(brain: impl Brain + 'static, registry: ToolRegistry) -> Self {
        let tools = RegistryToolExecutor::new(registry);
        let instructions = build_system_prompt(&tools.tool_specs());

        info!(
            "Research orchestrator ready with brain {} and {} tools",
            brain.name(),
            tools.tool_specs().len()
        );

        Self {
            brain: Box::new(brain),
            tools,
            instructions,
        }
    }

    /// Create an orchestrator backed by [`ClaudeBrain`], configured from the
    /// environment.
    pub fn from_env() -> Result<Self, OrchestratorError> {
        let brain = ClaudeBrain::from_env()?;
        let registry = ToolRegistry::new(&ToolsConfig::from_env())?;
        Ok(Self::new(brain, registry))
    }

    /// The system prompt sent with every query.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// The tools available to the brain.
    pub fn registry(&self) -> &ToolRegistry {
        self.tools.registry()
    }

    /// Name of the brain in use.
    pub fn brain_name(&self) -> &str {
        self.brain.name()
    }

    /// Research `query` and try to decode the answer as a report.
    ///
    /// Brain failures are errors. An answer that does not match the report
    /// schema is not: it comes back in [`ResearchOutcome::report`] with the
    /// raw text preserved.
    pub async fn research(&self, query: &str) -> Result<ResearchOutcome, OrchestratorError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(OrchestratorError::EmptyQuery);
        }

        info!("Researching query ({} chars)", query.len());
        let task = AgentTask::new(self.instructions.clone(), query);
        let answer = self.brain.run(&task, &self.tools).await?;

        debug!(
            "Brain answered with {} chars after {} tool calls ({})",
            answer.output.len(),
            answer.steps.len(),
            answer.tools_called().join(", ")
        );

        let report = parse(&answer.output);
        if let Err(e) = &report {
            warn!("Answer did not match the report schema: {}", e.message);
        }

        Ok(ResearchOutcome { answer, report })
    }

    /// Append a report to the configured output file.
    ///
    /// Returns the file writer's confirmation message.
    pub async fn save(&self, result: &ResearchResult) -> Result<String, OrchestratorError> {
        let payload = render_save_payload(result);
        let confirmation = self.registry().save_tool().save(&payload, None).await?;
        info!("Saved report on '{}'", result.topic);
        Ok(confirmation)
    }
}
