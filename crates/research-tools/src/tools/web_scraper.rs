//! Web page scraper: fetch a URL and reduce the HTML to readable text.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Node};
use tracing::debug;
use url::Url;

use super::text::truncate_chars;
use crate::error::ToolError;
use crate::tool::Tool;

/// Browser-like agent string; many sites refuse obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Characters of page text kept.
const MAX_TEXT_CHARS: usize = 2000;

/// Elements dropped together with everything inside them.
const SKIP_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Web scraper tool.
pub struct WebScraper {
    client: reqwest::Client,
}

impl WebScraper {
    /// Create a scraper whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ToolError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &Url) -> Result<String, ToolError> {
        debug!("Fetching URL: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(ToolError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}

fn parse_url(input: &str) -> Result<Url, ToolError> {
    let url = Url::parse(input.trim())
        .map_err(|e| ToolError::InvalidInput(format!("Invalid URL '{}': {}", input.trim(), e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ToolError::InvalidInput(format!(
            "Unsupported URL scheme '{}'",
            other
        ))),
    }
}

/// Extract visible text, one trimmed non-empty line per text run.
///
/// The tree is walked with an explicit stack, so arbitrarily deep markup
/// cannot exhaust the call stack.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    let root = document.root_element();
    if SKIP_TAGS.contains(&root.value().name()) {
        return String::new();
    }

    let mut pending: Vec<_> = root.children().rev().collect();
    while let Some(node) = pending.pop() {
        match node.value() {
            Node::Text(text) => {
                lines.extend(
                    text.lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_string),
                );
            }
            Node::Element(element) => {
                if !SKIP_TAGS.contains(&element.name()) {
                    pending.extend(node.children().rev());
                }
            }
            _ => {}
        }
    }

    lines.join("\n")
}

#[async_trait]
impl Tool for WebScraper {
    fn name(&self) -> &str {
        "web_scraper"
    }

    fn description(&self) -> &str {
        "Extracts text content from a specific webpage URL. Use this when you have a specific \
         URL to analyze or when you need content from a particular website."
    }

    fn input_description(&self) -> &str {
        "The full http(s) URL of the page to scrape"
    }

    fn error_context(&self) -> &str {
        "Error scraping webpage"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let url = parse_url(input)?;
        let html = self.fetch(&url).await?;
        let text = html_to_text(&html);
        debug!("Scraped {} chars from {}", text.chars().count(), url);

        Ok(format!(
            "📄 Content from {}:\n\n{}",
            input.trim(),
            truncate_chars(&text, MAX_TEXT_CHARS, "...(truncated)")
        ))
    }
}
