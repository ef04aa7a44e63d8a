//! Encyclopedia lookup via the MediaWiki API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::text::truncate_chars;
use crate::error::ToolError;
use crate::tool::Tool;

/// Pages returned per lookup.
const TOP_K_RESULTS: usize = 2;

/// Characters kept from each page extract.
const MAX_EXTRACT_CHARS: usize = 500;

/// Returned when the search matches nothing.
pub const NO_RESULT: &str = "No good Wikipedia Search Result was found";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryPages>,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    /// Search rank, 1-based.
    #[serde(default)]
    index: usize,
    #[serde(default)]
    extract: String,
}

/// Wikipedia tool: top search hits with their plain-text intros.
pub struct Wikipedia {
    client: reqwest::Client,
    api_url: String,
}

impl Wikipedia {
    /// Create a lookup tool against a MediaWiki `api.php` URL.
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    async fn lookup(&self, query: &str) -> Result<Vec<Page>, ToolError> {
        let limit = TOP_K_RESULTS.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("generator", "search"),
                ("gsrsearch", query),
                ("gsrlimit", limit.as_str()),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("exlimit", limit.as_str()),
                ("redirects", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ToolError::HttpStatus(response.status()));
        }

        let body: QueryResponse = response.json().await?;
        let mut pages = body.query.map(|q| q.pages).unwrap_or_default();
        pages.sort_by_key(|p| p.index);
        pages.truncate(TOP_K_RESULTS);
        Ok(pages)
    }
}

fn format_pages(pages: &[Page]) -> String {
    let blocks: Vec<String> = pages
        .iter()
        .map(|page| {
            format!(
                "Page: {}\nSummary: {}",
                page.title,
                truncate_chars(page.extract.trim(), MAX_EXTRACT_CHARS, "")
            )
        })
        .collect();

    if blocks.is_empty() {
        NO_RESULT.to_string()
    } else {
        blocks.join("\n\n")
    }
}

#[async_trait]
impl Tool for Wikipedia {
    fn name(&self) -> &str {
        "wikipedia"
    }

    fn description(&self) -> &str {
        "Search Wikipedia for encyclopedic knowledge, historical information, scientific \
         concepts, and factual data. Use this for well-established facts and definitions."
    }

    fn input_description(&self) -> &str {
        "The topic or search query to look up"
    }

    fn error_context(&self) -> &str {
        "Error querying Wikipedia"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let query = input.trim();
        if query.is_empty() {
            return Ok(NO_RESULT.to_string());
        }

        debug!("Wikipedia lookup: {}", query);
        let pages = self.lookup(query).await?;
        debug!("Wikipedia returned {} page(s)", pages.len());
        Ok(format_pages(&pages))
    }
}
