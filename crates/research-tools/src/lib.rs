//! Tool registry and implementations for the research assistant.
//!
//! Every tool takes one string and returns one string. Failures never
//! escape a tool: they come back as text starting with `❌` so the agent
//! can read them and adapt.
//!
//! # Architecture
//!
//! - [`Tool`] is the adapter trait. [`Tool::execute`] reports typed
//!   [`ToolError`]s; [`Tool::invoke`] renders them.
//! - [`ToolRegistry`] holds exactly one adapter per [`ToolKind`], in a
//!   fixed menu order. There is no runtime registration.
//! - [`RegistryToolExecutor`] exposes the registry to brains through
//!   brain-core's `ToolExecutor` trait.
//!
//! # Built-in Tools
//!
//! - [`WebSearch`] - DuckDuckGo Instant Answer digest.
//! - [`Wikipedia`] - Top MediaWiki search hits with intro extracts.
//! - [`Calculator`] - Arithmetic through the allow-list evaluator in [`eval`].
//! - [`WebScraper`] - Visible text of a web page.
//! - [`DataAnalysis`] - Summary statistics for CSV/JSON files.
//! - [`DateTimeInfo`] - Current date and time.
//! - [`FileReader`] - Local text files.
//! - [`SaveToFile`] - Append timestamped blocks to a text file.
//!
//! # Example
//!
//! ```rust,no_run
//! use research_tools::{ToolRegistry, ToolsConfig};
//!
//! # async fn run() -> Result<(), research_tools::ToolError> {
//! let registry = ToolRegistry::new(&ToolsConfig::from_env())?;
//! let result = registry.invoke("calculator", "15% of 850").await;
//! assert_eq!(result, "Result: 127.5");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod eval;
mod executor;
mod registry;
mod tool;
pub mod tools;

pub use config::{
    ToolsConfig, ToolsConfigBuilder, DEFAULT_OUTPUT_FILE, DEFAULT_SEARCH_API_URL,
    DEFAULT_WIKIPEDIA_API_URL,
};
pub use error::{ToolError, ERROR_MARKER};
pub use executor::RegistryToolExecutor;
pub use registry::{ToolKind, ToolRegistry};
pub use tool::Tool;
pub use tools::{
    calculate, Calculator, DataAnalysis, DateTimeInfo, FileReader, SaveToFile, WebScraper,
    WebSearch, Wikipedia,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Build the registry from environment configuration.
pub fn default_registry() -> Result<ToolRegistry, ToolError> {
    ToolRegistry::new(&ToolsConfig::from_env())
}
