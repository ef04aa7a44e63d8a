//! Append research output to a text file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::ToolError;
use crate::tool::Tool;

/// Width of the rule lines around the timestamp.
const RULE_WIDTH: usize = 60;

/// Save tool: appends timestamped blocks, never truncates.
pub struct SaveToFile {
    output_file: PathBuf,
}

impl SaveToFile {
    /// Create a save tool writing to `output_file` by default.
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// The file used when no path is given.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Append `data` to `path`, or to the configured file when `None`.
    ///
    /// Returns the success line naming the file.
    pub async fn save(&self, data: &str, path: Option<&Path>) -> Result<String, ToolError> {
        let path = path.unwrap_or(self.output_file.as_path());
        let block = format_block(data, Local::now().naive_local());

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(block.as_bytes()).await?;
        file.flush().await?;

        info!("Saved {} bytes to {}", block.len(), path.display());
        Ok(format!("✅ Data successfully saved to {}", path.display()))
    }
}

/// One persisted block: rule, timestamp, rule, payload, two blank lines.
pub fn format_block(data: &str, timestamp: NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\n⏰ Timestamp: {}\n{rule}\n\n{}\n\n",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        data,
    )
}

#[async_trait]
impl Tool for SaveToFile {
    fn name(&self) -> &str {
        "save_text_to_file"
    }

    fn description(&self) -> &str {
        "Saves structured research data to a text file with timestamp. Use this to preserve \
         research findings."
    }

    fn input_description(&self) -> &str {
        "The text to save"
    }

    fn error_context(&self) -> &str {
        "Error saving file"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        self.save(input, None).await
    }
}
