//! ClaudeBrain implementation using the Anthropic Messages API.

use brain_core::{
    async_trait, hash_prompt, AgentAnswer, AgentStep, AgentTask, Brain, BrainError, ToolExecutor,
    ToolRequest,
};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, ContentBlock, Message, MessagesRequest, MessagesResponse, StopReason,
    ToolDefinition,
};
use crate::config::ClaudeBrainConfig;

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Answer text returned when the model is still calling tools after the
/// last allowed turn.
pub const ITERATION_LIMIT_MESSAGE: &str = "Agent stopped due to iteration limit.";

/// A brain that lets Claude pick tools until it has an answer.
///
/// Each turn sends the whole conversation so far. Tool calls from one turn
/// run one after another, in the order the model listed them, and their
/// observations go back in the next turn. A task costs at most
/// `max_iterations` API calls.
pub struct ClaudeBrain {
    client: Client,
    config: ClaudeBrainConfig,
}

impl ClaudeBrain {
    /// Create a new ClaudeBrain with the given configuration.
    pub fn new(config: ClaudeBrainConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "ClaudeBrain initialized with model: {}, max_iterations: {}",
            config.model, config.max_iterations
        );

        Ok(Self { client, config })
    }

    /// Create a ClaudeBrain from environment variables.
    ///
    /// See [`ClaudeBrainConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, BrainError> {
        let config = ClaudeBrainConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClaudeBrainConfig {
        &self.config
    }

    /// Make one Messages API call.
    async fn create_message(
        &self,
        system: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<MessagesResponse, BrainError> {
        let url = format!("{}/v1/messages", self.config.api_url.trim_end_matches('/'));

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            system: (!system.is_empty()).then(|| system.to_string()),
            messages: messages.to_vec(),
            tools: tools.to_vec(),
            temperature: self.config.temperature,
        };

        debug!(
            "Sending request to Anthropic API with {} messages",
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BrainError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => {
                    debug!("Anthropic API error type: {}", api_error.error.error_type);
                    api_error.error.message
                }
                Err(_) => error_text,
            };

            return Err(match status {
                StatusCode::UNAUTHORIZED => BrainError::Configuration(format!(
                    "Unauthorized - check ANTHROPIC_API_KEY: {}",
                    message
                )),
                StatusCode::TOO_MANY_REQUESTS => {
                    BrainError::Unavailable(format!("Rate limited: {}", message))
                }
                _ => BrainError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    message
                )),
            });
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        debug!(
            "Received {} content blocks, stop_reason: {:?}",
            message.content.len(),
            message.stop_reason
        );

        Ok(message)
    }
}

#[async_trait]
impl Brain for ClaudeBrain {
    async fn run(
        &self,
        task: &AgentTask,
        tools: &dyn ToolExecutor,
    ) -> Result<AgentAnswer, BrainError> {
        let definitions: Vec<ToolDefinition> =
            tools.tool_specs().iter().map(ToolDefinition::from).collect();

        info!(
            "Starting research run (prompt {}, {} tools)",
            &hash_prompt(&task.instructions)[..12],
            definitions.len()
        );

        let mut messages = vec![Message::user(task.query.clone())];
        let mut steps: Vec<AgentStep> = Vec::new();

        for iteration in 1..=self.config.max_iterations {
            let response = self
                .create_message(&task.instructions, &messages, &definitions)
                .await?;

            let calls: Vec<ToolRequest> = response
                .tool_uses()
                .into_iter()
                .map(|(id, name, input)| ToolRequest::from_value(id, name, input.clone()))
                .collect();

            if calls.is_empty() {
                if response.stop_reason == Some(StopReason::MaxTokens) {
                    warn!("Final answer was cut off at max_tokens");
                }
                info!(
                    "Research run finished after {} turns and {} tool calls",
                    iteration,
                    steps.len()
                );
                return Ok(AgentAnswer::new(response.text()).with_steps(steps));
            }

            messages.push(Message::assistant(response.content));

            let mut results = Vec::with_capacity(calls.len());
            for call in calls {
                let tool = call.name.clone();
                let input = call.input().to_string();
                debug!("Turn {}: calling {} with {:?}", iteration, tool, input);

                let result = tools.execute(call).await;
                if !result.success {
                    debug!("Tool {} reported failure", tool);
                }

                steps.push(AgentStep {
                    tool,
                    input,
                    observation: result.content.clone(),
                });
                results.push(ContentBlock::ToolResult {
                    tool_use_id: result.tool_call_id,
                    content: result.content,
                    is_error: !result.success,
                });
            }

            messages.push(Message::tool_results(results));
        }

        warn!(
            "Research run hit the iteration limit ({})",
            self.config.max_iterations
        );
        Ok(AgentAnswer::new(ITERATION_LIMIT_MESSAGE).with_steps(steps))
    }

    fn name(&self) -> &str {
        "ClaudeBrain"
    }

    async fn is_ready(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
