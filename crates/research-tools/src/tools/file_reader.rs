//! Read local text files.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::text::{clean_path, truncate_chars};
use crate::error::ToolError;
use crate::tool::Tool;

/// Characters of file content returned.
const MAX_CONTENT_CHARS: usize = 2000;

/// File reader tool.
pub struct FileReader;

impl FileReader {
    /// Create a new file reader tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FileReader {
    fn name(&self) -> &str {
        "file_reader"
    }

    fn description(&self) -> &str {
        "Reads and returns the content of local text files. Provide the file path to read. \
         Useful for analyzing existing documents or notes."
    }

    fn input_description(&self) -> &str {
        "Path to the text file"
    }

    fn error_context(&self) -> &str {
        "Error reading file"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let raw_path = clean_path(input);
        let path = Path::new(raw_path);

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound || raw_path.is_empty() => {
                return Err(ToolError::FileNotFound(raw_path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        debug!("Read {} bytes from {}", content.len(), raw_path);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw_path.to_string());

        Ok(format!(
            "📄 Content of {}:\n\n{}",
            file_name,
            truncate_chars(&content, MAX_CONTENT_CHARS, "\n...(truncated)")
        ))
    }
}
