//! Loading CSV and JSON files into a small column-typed table.

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::ToolError;

/// Tokens read as missing values in CSV input.
const MISSING_TOKENS: [&str; 11] = [
    "", "#N/A", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    fn from_csv(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_TOKENS.contains(&trimmed) {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(raw.to_string()),
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Missing,
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Missing),
            Value::String(s) => Cell::Text(s.clone()),
            Value::Bool(b) => Cell::Text(if *b { "True" } else { "False" }.to_string()),
            other => Cell::Text(other.to_string()),
        }
    }

    pub(crate) fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub(crate) fn display(&self) -> String {
        match self {
            Cell::Missing => "NaN".to_string(),
            Cell::Number(n) => super::stats::format_number(*n),
            Cell::Text(s) => s.clone(),
        }
    }
}

/// A loaded table: named columns of equal length.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub columns: Vec<String>,
    /// Row-major cells, each row as long as `columns`.
    pub rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// Parse CSV text with a header row.
    pub(crate) fn from_csv(content: &str) -> Result<Self, ToolError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let columns: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
        if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
            return Err(ToolError::InvalidInput(
                "No columns to parse from file".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from_csv).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Parse JSON holding either an array of records or an object of columns.
    ///
    /// Columns may be arrays (`{"a": [1, 2]}`) or index-keyed objects
    /// (`{"a": {"0": 1, "1": 2}}`).
    pub(crate) fn from_json(content: &str) -> Result<Self, ToolError> {
        let value: Value = serde_json::from_str(content)?;
        match value {
            Value::Array(records) => Self::from_records(&records),
            Value::Object(columns) => Self::from_columns(&columns),
            _ => Err(ToolError::InvalidInput(
                "JSON data must be an array of records or an object of columns".to_string(),
            )),
        }
    }

    fn from_records(records: &[Value]) -> Result<Self, ToolError> {
        let mut columns: IndexSet<String> = IndexSet::new();
        for record in records {
            let object = record.as_object().ok_or_else(|| {
                ToolError::InvalidInput("every JSON record must be an object".to_string())
            })?;
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|key| record.get(key).map(Cell::from_json).unwrap_or(Cell::Missing))
                    .collect()
            })
            .collect();

        Ok(Self {
            columns: columns.into_iter().collect(),
            rows,
        })
    }

    fn from_columns(object: &serde_json::Map<String, Value>) -> Result<Self, ToolError> {
        let mut columns = Vec::with_capacity(object.len());
        let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(object.len());

        for (name, values) in object {
            let column: Vec<Cell> = match values {
                Value::Array(items) => items.iter().map(Cell::from_json).collect(),
                Value::Object(indexed) => indexed.values().map(Cell::from_json).collect(),
                scalar => vec![Cell::from_json(scalar)],
            };
            columns.push(name.clone());
            cells.push(column);
        }

        let height = cells.iter().map(Vec::len).max().unwrap_or(0);
        let rows = (0..height)
            .map(|row| {
                cells
                    .iter()
                    .map(|column| column.get(row).cloned().unwrap_or(Cell::Missing))
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn width(&self) -> usize {
        self.columns.len()
    }

    /// Values of column `index` when every present cell is numeric.
    ///
    /// Returns `None` for text columns and for columns with no values.
    pub(crate) fn numeric_column(&self, index: usize) -> Option<Vec<f64>> {
        let mut values = Vec::new();
        for row in &self.rows {
            match row.get(index) {
                Some(Cell::Number(n)) => values.push(*n),
                Some(Cell::Text(_)) => return None,
                Some(Cell::Missing) | None => {}
            }
        }
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    pub(crate) fn missing_count(&self, index: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.get(index).map_or(true, Cell::is_missing))
            .count()
    }
}
