//! Error types for tool operations.

use thiserror::Error;

use crate::eval::EvalError;

/// Marker that prefixes every failure string a tool hands back.
pub const ERROR_MARKER: &str = "❌";

/// Errors that can occur during tool execution.
///
/// These never leave a tool as `Err`: [`Tool::invoke`](crate::Tool::invoke)
/// renders them into marker-prefixed strings the agent can read.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A local path that does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Data file with an extension other than `.csv` or `.json`.
    #[error("Unsupported file format. Use CSV or JSON.")]
    UnsupportedFormat,

    /// Input the tool cannot work with.
    #[error("{0}")]
    InvalidInput(String),

    /// HTTP request failed.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Local file I/O failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Expression evaluation failed (calculator).
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ToolError {
    /// Render as the string an agent sees, using `context` to name the
    /// operation for errors that do not speak for themselves.
    pub fn render(&self, context: &str) -> String {
        match self {
            ToolError::NotFound(_) | ToolError::FileNotFound(_) | ToolError::UnsupportedFormat => {
                format!("{} {}", ERROR_MARKER, self)
            }
            ToolError::Eval(e) => format!(
                "{} Calculation error: {}. Please provide a valid mathematical expression.",
                ERROR_MARKER, e
            ),
            _ => format!("{} {}: {}", ERROR_MARKER, context, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_context() {
        let err = ToolError::HttpStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            err.render("Error scraping webpage"),
            "❌ Error scraping webpage: HTTP status 404 Not Found"
        );
    }

    #[test]
    fn test_render_self_describing() {
        let err = ToolError::FileNotFound("data.csv".to_string());
        assert_eq!(err.render("ignored"), "❌ File not found: data.csv");

        let err = ToolError::UnsupportedFormat;
        assert_eq!(
            err.render("ignored"),
            "❌ Unsupported file format. Use CSV or JSON."
        );
    }

    #[test]
    fn test_render_calculation_error() {
        let err = ToolError::from(EvalError::DivisionByZero);
        assert_eq!(
            err.render("ignored"),
            "❌ Calculation error: division by zero. Please provide a valid mathematical expression."
        );
    }
}
