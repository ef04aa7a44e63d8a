//! Web search via the DuckDuckGo Instant Answer API.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::tool::Tool;

/// Related topics kept in a digest.
const MAX_RELATED_TOPICS: usize = 10;

/// Web search tool.
///
/// Makes one request per call and turns the instant-answer payload into a
/// plain-text digest. No retries and no pagination.
pub struct WebSearch {
    client: reqwest::Client,
    api_url: String,
}

impl WebSearch {
    /// Create a search tool against `api_url`.
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    async fn search(&self, query: &str) -> Result<Value, ToolError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ToolError::HttpStatus(response.status()));
        }

        // The API serves JSON as application/x-javascript, so decode the text.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Render an instant-answer payload as text.
fn format_results(query: &str, data: &Value) -> String {
    let mut sections = Vec::new();

    if let Some(abstract_text) = non_empty(data, "AbstractText") {
        let source = data["AbstractSource"].as_str().unwrap_or("Unknown");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        sections.push(format!(
            "Summary ({}): {}\nSource: {}",
            source, abstract_text, url
        ));
    }

    if let Some(answer) = non_empty(data, "Answer") {
        sections.push(format!("Answer: {}", answer));
    }

    if let Some(definition) = non_empty(data, "Definition") {
        let source = data["DefinitionSource"].as_str().unwrap_or("Unknown");
        sections.push(format!("Definition ({}): {}", source, definition));
    }

    let topics: Vec<String> = related_topics(data)
        .into_iter()
        .take(MAX_RELATED_TOPICS)
        .map(|(text, url)| {
            if url.is_empty() {
                format!("- {}", text)
            } else {
                format!("- {} ({})", text, url)
            }
        })
        .collect();
    if !topics.is_empty() {
        sections.push(format!("Related topics:\n{}", topics.join("\n")));
    }

    if sections.is_empty() {
        return format!("No results found for '{}'.", query);
    }

    format!("Search results for '{}':\n\n{}", query, sections.join("\n\n"))
}

fn non_empty<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data[key].as_str().filter(|s| !s.trim().is_empty())
}

/// Flatten `RelatedTopics`, including the nested `Topics` groups.
fn related_topics(data: &Value) -> Vec<(&str, &str)> {
    fn collect<'a>(items: &'a [Value], out: &mut Vec<(&'a str, &'a str)>) {
        for item in items {
            if let Some(nested) = item["Topics"].as_array() {
                collect(nested, out);
            } else if let Some(text) = item["Text"].as_str().filter(|t| !t.is_empty()) {
                out.push((text, item["FirstURL"].as_str().unwrap_or("")));
            }
        }
    }

    let mut out = Vec::new();
    if let Some(items) = data["RelatedTopics"].as_array() {
        collect(items, &mut out);
    }
    out
}

#[async_trait]
impl Tool for WebSearch {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search the web for current information, news, and real-time data. Use this for \
         recent events, current statistics, or when you need up-to-date information."
    }

    fn input_description(&self) -> &str {
        "The search query"
    }

    fn error_context(&self) -> &str {
        "Error searching the web"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let query = input.trim();
        if query.is_empty() {
            return Err(ToolError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        debug!("Searching: {}", query);
        let data = self.search(query).await?;
        Ok(format_results(query, &data))
    }
}
