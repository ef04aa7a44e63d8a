//! The closed, ordered set of research tools.

use brain_core::ToolSpec;
use tracing::{debug, info};

use crate::config::ToolsConfig;
use crate::error::ToolError;
use crate::tool::Tool;
use crate::tools::{
    Calculator, DataAnalysis, DateTimeInfo, FileReader, SaveToFile, WebScraper, WebSearch,
    Wikipedia,
};

/// User agent for API backends that ask clients to identify themselves.
const API_USER_AGENT: &str = concat!("research-assistant/", env!("CARGO_PKG_VERSION"));

/// Every tool the assistant knows. There is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Search,
    Wikipedia,
    Calculator,
    WebScraper,
    DataAnalysis,
    DateTime,
    FileReader,
    SaveTextToFile,
}

impl ToolKind {
    /// All tools in menu order.
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Search,
        ToolKind::Wikipedia,
        ToolKind::Calculator,
        ToolKind::WebScraper,
        ToolKind::DataAnalysis,
        ToolKind::DateTime,
        ToolKind::FileReader,
        ToolKind::SaveTextToFile,
    ];

    /// Dispatch name.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Search => "search",
            ToolKind::Wikipedia => "wikipedia",
            ToolKind::Calculator => "calculator",
            ToolKind::WebScraper => "web_scraper",
            ToolKind::DataAnalysis => "data_analysis",
            ToolKind::DateTime => "datetime",
            ToolKind::FileReader => "file_reader",
            ToolKind::SaveTextToFile => "save_text_to_file",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Registry holding one adapter per [`ToolKind`].
///
/// Built once at startup and read-only afterwards, so it can be shared
/// freely between tasks.
pub struct ToolRegistry {
    search: WebSearch,
    wikipedia: Wikipedia,
    calculator: Calculator,
    web_scraper: WebScraper,
    data_analysis: DataAnalysis,
    datetime: DateTimeInfo,
    file_reader: FileReader,
    save: SaveToFile,
}

impl ToolRegistry {
    /// Build every tool from `config`.
    pub fn new(config: &ToolsConfig) -> Result<Self, ToolError> {
        let api_client = reqwest::Client::builder()
            .user_agent(API_USER_AGENT)
            .build()?;

        let registry = Self {
            search: WebSearch::new(api_client.clone(), &config.search_api_url),
            wikipedia: Wikipedia::new(api_client, &config.wikipedia_api_url),
            calculator: Calculator::new(),
            web_scraper: WebScraper::new(config.scraper_timeout)?,
            data_analysis: DataAnalysis::new(),
            datetime: DateTimeInfo::new(),
            file_reader: FileReader::new(),
            save: SaveToFile::new(&config.output_file),
        };

        info!(
            "Registered {} tools (output file: {})",
            ToolKind::ALL.len(),
            config.output_file.display()
        );
        Ok(registry)
    }

    /// The adapter for `kind`.
    pub fn tool(&self, kind: ToolKind) -> &dyn Tool {
        match kind {
            ToolKind::Search => &self.search,
            ToolKind::Wikipedia => &self.wikipedia,
            ToolKind::Calculator => &self.calculator,
            ToolKind::WebScraper => &self.web_scraper,
            ToolKind::DataAnalysis => &self.data_analysis,
            ToolKind::DateTime => &self.datetime,
            ToolKind::FileReader => &self.file_reader,
            ToolKind::SaveTextToFile => &self.save,
        }
    }

    /// All tools, in menu order.
    pub fn list_tools(&self) -> Vec<&dyn Tool> {
        ToolKind::ALL.iter().map(|kind| self.tool(*kind)).collect()
    }

    /// Look a tool up by name.
    pub fn get(&self, name: &str) -> Result<&dyn Tool, ToolError> {
        ToolKind::from_name(name)
            .map(|kind| self.tool(kind))
            .ok_or_else(|| ToolError::NotFound(name.to_string()))
    }

    /// Menu entries for a brain, in menu order.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.list_tools().into_iter().map(|tool| tool.spec()).collect()
    }

    /// The save adapter, for saving outside the agent loop.
    pub fn save_tool(&self) -> &SaveToFile {
        &self.save
    }

    /// Invoke a tool by name. Never fails: unknown names and tool errors
    /// come back as `❌` strings.
    pub async fn invoke(&self, name: &str, input: &str) -> String {
        let tool = match self.get(name) {
            Ok(tool) => tool,
            Err(e) => return e.render("Tool error"),
        };

        debug!("Invoking tool '{}' with {} chars of input", name, input.len());
        let output = tool.invoke(input).await;
        debug!("Tool '{}' returned {} chars", name, output.len());
        output
    }
}
