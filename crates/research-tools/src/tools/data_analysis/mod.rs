//! Data analysis tool: summary statistics for CSV and JSON files.

mod frame;
mod stats;

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::text::clean_path;
use crate::error::ToolError;
use crate::tool::Tool;
use frame::Frame;
use stats::{render_rows, render_table, Describe, DESCRIBE_LABELS};

/// Rows shown in the preview section.
const PREVIEW_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(DataFormat::Csv),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }
}

/// Data analysis tool.
///
/// Loads a whole CSV or JSON file and reports its shape, columns, a numeric
/// describe table, per-column missing counts and the first rows.
pub struct DataAnalysis;

impl DataAnalysis {
    /// Create a new data analysis tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DataAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the analysis report for a loaded table.
fn render_report(file_name: &str, frame: &Frame) -> String {
    let mut out = format!("📊 Data Analysis Summary for {}\n\n", file_name);

    out.push_str(&format!(
        "📏 Dimensions: {} rows × {} columns\n\n",
        frame.height(),
        frame.width()
    ));
    out.push_str(&format!("📋 Columns: {}\n\n", frame.columns.join(", ")));

    out.push_str("🔢 Numeric Summary:\n");
    out.push_str(&describe_table(frame));
    out.push_str("\n\n");

    out.push_str("❓ Missing Values:\n");
    let missing: Vec<Vec<String>> = frame
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| vec![name.clone(), frame.missing_count(i).to_string()])
        .collect();
    out.push_str(&render_rows(&missing));
    out.push_str("\n\n");

    out.push_str(&format!("📌 First {} Rows:\n", PREVIEW_ROWS));
    out.push_str(&preview_table(frame));
    out.push('\n');

    out
}

fn describe_table(frame: &Frame) -> String {
    let described: Vec<(&String, Describe)> = frame
        .columns
        .iter()
        .enumerate()
        .filter_map(|(i, name)| {
            let values = frame.numeric_column(i)?;
            Describe::of(&values).map(|d| (name, d))
        })
        .collect();

    if described.is_empty() {
        return "No numeric columns to describe.".to_string();
    }

    let mut header = vec![String::new()];
    header.extend(described.iter().map(|(name, _)| (*name).clone()));

    let cells: Vec<[String; 8]> = described.iter().map(|(_, d)| d.cells()).collect();
    let rows: Vec<Vec<String>> = DESCRIBE_LABELS
        .iter()
        .enumerate()
        .map(|(stat, label)| {
            let mut row = vec![label.to_string()];
            row.extend(cells.iter().map(|c| c[stat].clone()));
            row
        })
        .collect();

    render_table(&header, &rows)
}

fn preview_table(frame: &Frame) -> String {
    if frame.rows.is_empty() {
        return "No rows.".to_string();
    }

    let mut header = vec![String::new()];
    header.extend(frame.columns.iter().cloned());

    let rows: Vec<Vec<String>> = frame
        .rows
        .iter()
        .take(PREVIEW_ROWS)
        .enumerate()
        .map(|(index, cells)| {
            let mut row = vec![index.to_string()];
            row.extend(cells.iter().map(|c| c.display()));
            row
        })
        .collect();

    render_table(&header, &rows)
}

#[async_trait]
impl Tool for DataAnalysis {
    fn name(&self) -> &str {
        "data_analysis"
    }

    fn description(&self) -> &str {
        "Analyzes CSV or JSON data files and provides statistics, missing values, and data \
         preview. Provide the file path to analyze."
    }

    fn input_description(&self) -> &str {
        "Path to a .csv or .json file"
    }

    fn error_context(&self) -> &str {
        "Error analyzing data"
    }

    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let raw_path = clean_path(input);
        let path = Path::new(raw_path);

        if raw_path.is_empty() || !tokio::fs::try_exists(path).await? {
            return Err(ToolError::FileNotFound(raw_path.to_string()));
        }

        let format = DataFormat::from_path(path).ok_or(ToolError::UnsupportedFormat)?;
        let content = tokio::fs::read_to_string(path).await?;
        debug!("Analyzing {:?} file {} ({} bytes)", format, raw_path, content.len());

        let frame = match format {
            DataFormat::Csv => Frame::from_csv(&content)?,
            DataFormat::Json => Frame::from_json(&content)?,
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| raw_path.to_string());

        Ok(render_report(&file_name, &frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_missing_file() {
        let output = DataAnalysis::new().invoke("/definitely/not/here.csv").await;
        assert_eq!(output, "❌ File not found: /definitely/not/here.csv");
    }

    #[tokio::test]
    async fn test_missing_file_checked_before_format() {
        let output = DataAnalysis::new().invoke("/definitely/not/here.xlsx").await;
        assert_eq!(output, "❌ File not found: /definitely/not/here.xlsx");
    }

    #[tokio::test]
    async fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "plain.txt", "not a directory");
        let path = format!("{}/data.csv", file);

        let output = DataAnalysis::new().invoke(&path).await;
        assert!(output.starts_with("❌ Error analyzing data: "));
        assert!(!output.contains("File not found"));
    }

    #[tokio::test]
    async fn test_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "table.xlsx", "binary");
        let output = DataAnalysis::new().invoke(&path).await;
        assert_eq!(output, "❌ Unsupported file format. Use CSV or JSON.");
    }

    #[tokio::test]
    async fn test_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "people.csv",
            "name,age,score\nann,30,1.5\nbob,,2.5\ncy,41,3.5\ndee,25,4.5\n",
        );

        let output = DataAnalysis::new().invoke(&path).await;
        assert!(output.starts_with("📊 Data Analysis Summary for people.csv\n\n"));
        assert!(output.contains("📏 Dimensions: 4 rows × 3 columns"));
        assert!(output.contains("📋 Columns: name, age, score"));

        let summary = output
            .split("🔢 Numeric Summary:\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains("age") && lines[0].contains("score"));
        assert!(!lines[0].contains("name"));
        assert!(lines[1].starts_with("count") && lines[1].ends_with("4"));
        assert!(lines[2].starts_with("mean") && lines[2].ends_with("3"));

        assert!(output.contains("❓ Missing Values:\nname   0\nage    1\nscore  0\n\n"));
        assert!(output.contains("📌 First 3 Rows:"));
        assert!(output.contains("bob  NaN"));
        assert!(!output.contains("dee"));
    }

    #[tokio::test]
    async fn test_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "sales.json",
            r#"[{"region": "north", "units": 10}, {"region": "south", "units": 30}]"#,
        );

        let output = DataAnalysis::new().invoke(&path).await;
        assert!(output.contains("📏 Dimensions: 2 rows × 2 columns"));
        assert!(output.contains("📋 Columns: region, units"));
        assert!(output
            .lines()
            .any(|line| line.starts_with("mean") && line.ends_with(" 20")));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "broken.json", "{not json");
        let output = DataAnalysis::new().invoke(&path).await;
        assert!(output.starts_with("❌ Error analyzing data: JSON error:"));
    }
}
