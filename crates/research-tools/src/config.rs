//! Configuration for the tool adapters.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default file the save tool appends to.
pub const DEFAULT_OUTPUT_FILE: &str = "research_output.txt";

/// DuckDuckGo Instant Answer endpoint.
pub const DEFAULT_SEARCH_API_URL: &str = "https://api.duckduckgo.com/";

/// English Wikipedia MediaWiki endpoint.
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Configuration shared by the tools in a registry.
#[derive(Debug, Clone)]
pub struct ToolsConfig {
    /// File `save_text_to_file` appends to when no path is given.
    pub output_file: PathBuf,

    /// Search backend URL.
    pub search_api_url: String,

    /// Encyclopedia backend URL.
    pub wikipedia_api_url: String,

    /// Request timeout for the page scraper.
    pub scraper_timeout: Duration,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            search_api_url: DEFAULT_SEARCH_API_URL.to_string(),
            wikipedia_api_url: DEFAULT_WIKIPEDIA_API_URL.to_string(),
            scraper_timeout: Duration::from_secs(10),
        }
    }
}

impl ToolsConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESEARCH_OUTPUT_FILE` - Save file (default: research_output.txt)
    /// - `SEARCH_API_URL` - Search endpoint (default: DuckDuckGo Instant Answer API)
    /// - `WIKIPEDIA_API_URL` - MediaWiki endpoint (default: en.wikipedia.org)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let output_file = env::var("RESEARCH_OUTPUT_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_file);

        let search_api_url = env::var("SEARCH_API_URL").unwrap_or(defaults.search_api_url);

        let wikipedia_api_url =
            env::var("WIKIPEDIA_API_URL").unwrap_or(defaults.wikipedia_api_url);

        Self {
            output_file,
            search_api_url,
            wikipedia_api_url,
            scraper_timeout: defaults.scraper_timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> ToolsConfigBuilder {
        ToolsConfigBuilder::default()
    }
}

/// Builder for ToolsConfig.
#[derive(Debug, Default)]
pub struct ToolsConfigBuilder {
    config: ToolsConfig,
}

impl ToolsConfigBuilder {
    /// Set the default save file.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_file = path.into();
        self
    }

    /// Set the search endpoint.
    pub fn search_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.search_api_url = url.into();
        self
    }

    /// Set the encyclopedia endpoint.
    pub fn wikipedia_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.wikipedia_api_url = url.into();
        self
    }

    /// Set the scraper timeout.
    pub fn scraper_timeout(mut self, timeout: Duration) -> Self {
        self.config.scraper_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ToolsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolsConfig::default();
        assert_eq!(config.output_file, PathBuf::from("research_output.txt"));
        assert_eq!(config.search_api_url, DEFAULT_SEARCH_API_URL);
        assert_eq!(config.wikipedia_api_url, DEFAULT_WIKIPEDIA_API_URL);
        assert_eq!(config.scraper_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_all_options() {
        let config = ToolsConfig::builder()
            .output_file("notes.txt")
            .search_api_url("http://localhost:1/search")
            .wikipedia_api_url("http://localhost:1/wiki")
            .scraper_timeout(Duration::from_secs(2))
            .build();

        assert_eq!(config.output_file, PathBuf::from("notes.txt"));
        assert_eq!(config.search_api_url, "http://localhost:1/search");
        assert_eq!(config.wikipedia_api_url, "http://localhost:1/wiki");
        assert_eq!(config.scraper_timeout, Duration::from_secs(2));
    }

    // Env vars are process-global, so all scenarios share one test.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_vars() {
            std::env::remove_var("RESEARCH_OUTPUT_FILE");
            std::env::remove_var("SEARCH_API_URL");
            std::env::remove_var("WIKIPEDIA_API_URL");
        }

        clear_vars();
        let config = ToolsConfig::from_env();
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.search_api_url, DEFAULT_SEARCH_API_URL);

        std::env::set_var("RESEARCH_OUTPUT_FILE", "out/report.txt");
        std::env::set_var("SEARCH_API_URL", "http://search.test/");
        std::env::set_var("WIKIPEDIA_API_URL", "http://wiki.test/api.php");
        let config = ToolsConfig::from_env();
        assert_eq!(config.output_file, PathBuf::from("out/report.txt"));
        assert_eq!(config.search_api_url, "http://search.test/");
        assert_eq!(config.wikipedia_api_url, "http://wiki.test/api.php");

        std::env::set_var("RESEARCH_OUTPUT_FILE", "  ");
        let config = ToolsConfig::from_env();
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));

        clear_vars();
    }
}
