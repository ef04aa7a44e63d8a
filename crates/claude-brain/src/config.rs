//! Configuration for ClaudeBrain.

use brain_core::BrainError;
use std::env;

/// Default Anthropic API base URL.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default response token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default number of model turns before the agent gives up.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Configuration for ClaudeBrain.
#[derive(Debug, Clone)]
pub struct ClaudeBrainConfig {
    /// Anthropic API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens per model response.
    pub max_tokens: u32,

    /// Temperature for generation (0.0 - 1.0). Left to the API default when unset.
    pub temperature: Option<f32>,

    /// Model turns allowed per task.
    pub max_iterations: usize,
}

impl Default for ClaudeBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ClaudeBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ANTHROPIC_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `ANTHROPIC_API_URL` - API URL (default: https://api.anthropic.com)
    /// - `CLAUDE_MODEL` - Model name (default: claude-3-5-sonnet-20241022)
    /// - `CLAUDE_MAX_TOKENS` - Max tokens (default: 4096)
    /// - `CLAUDE_TEMPERATURE` - Temperature (default: unset)
    /// - `CLAUDE_MAX_ITERATIONS` - Agent turn budget (default: 10)
    pub fn from_env() -> Result<Self, BrainError> {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| BrainError::Configuration("ANTHROPIC_API_KEY not set".to_string()))?;

        let api_url =
            env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("CLAUDE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = env::var("CLAUDE_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let temperature = env::var("CLAUDE_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_iterations = env::var("CLAUDE_MAX_ITERATIONS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_ITERATIONS);

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            max_iterations,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> ClaudeBrainConfigBuilder {
        ClaudeBrainConfigBuilder::default()
    }
}

/// Builder for ClaudeBrainConfig.
#[derive(Debug, Default)]
pub struct ClaudeBrainConfigBuilder {
    config: ClaudeBrainConfig,
}

impl ClaudeBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = tokens;
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the iteration budget.
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.config.max_iterations = iterations;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClaudeBrainConfig {
        self.config
    }
}
