//! Descriptive statistics and plain-text table rendering.

/// Row labels of the describe table, in order.
pub(crate) const DESCRIBE_LABELS: [&str; 8] =
    ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary statistics of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; NaN below two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Describe a non-empty set of values.
    pub(crate) fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count < 2 {
            f64::NAN
        } else {
            let sq: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (sq / (count - 1) as f64).sqrt()
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }

    /// Cells in [`DESCRIBE_LABELS`] order.
    pub(crate) fn cells(&self) -> [String; 8] {
        [
            self.count.to_string(),
            format_number(self.mean),
            format_number(self.std),
            format_number(self.min),
            format_number(self.q25),
            format_number(self.median),
            format_number(self.q75),
            format_number(self.max),
        ]
    }
}

/// Quantile of sorted data with linear interpolation between ranks.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
        }
    }
}

/// Up to six decimals, trailing zeros dropped.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{:.0}", n);
    }
    let fixed = format!("{:.6}", n);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render an aligned text table. The first column (row labels) is
/// left-aligned, the rest right-aligned, separated by two spaces.
pub(crate) fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut all = Vec::with_capacity(rows.len() + 1);
    all.push(header.to_vec());
    all.extend(rows.iter().cloned());
    render_rows(&all)
}

/// Like [`render_table`] without a header line.
pub(crate) fn render_rows(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let parts: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == 0 {
                        format!("{:<width$}", cell, width = widths[i])
                    } else {
                        format!("{:>width$}", cell, width = widths[i])
                    }
                })
                .collect();
            parts.join("  ").trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
