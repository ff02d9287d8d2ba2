//! Chart transform engine
//!
//! Pure mapping from a tabular `ReportResult` and a chart type to a
//! renderer-agnostic `ChartOption`. Only the first two headers participate:
//! the first names the category axis, the second the values. Non-numeric
//! values silently coerce to 0 instead of failing the chart.

pub mod options;

mod bar;
mod kpi;
mod line;
mod pie;
mod scatter;
mod table;

pub use kpi::kpi_value;
pub use options::ChartOption;
pub use table::{table_payload, TableColumn, TablePayload};

use ar_core::{ChartType, ReportResult};

/// Build the chart option for a result, or `None` when there is nothing to
/// draw (no rows, or no headers to name a series by).
pub fn transform(result: &ReportResult, chart_type: ChartType, title: &str) -> Option<ChartOption> {
    if result.data.is_empty() {
        return None;
    }

    let x_field = &result.headers.first()?.key;
    let y_field = result.headers.get(1).map(|h| h.key.as_str());
    let y_label = result.headers.get(1).map(|h| h.label.as_str());

    let option = match chart_type {
        ChartType::Line => line::build(result, x_field, y_field, y_label, title, false),
        ChartType::Area => line::build(result, x_field, y_field, y_label, title, true),
        ChartType::Scatter => scatter::build(result, x_field, y_field, y_label, title),
        ChartType::Pie => pie::build(result, x_field, y_field, title, false),
        ChartType::Doughnut => pie::build(result, x_field, y_field, title, true),
        ChartType::Bar => bar::build(result, x_field, y_field, y_label, title),
        ChartType::Other => {
            tracing::debug!("unknown chart type, falling back to bar");
            bar::build(result, x_field, y_field, y_label, title)
        }
    };

    Some(option)
}

/// Extract `(categories, values)` from the first two result columns
pub(crate) fn series_data(
    result: &ReportResult,
    x_field: &str,
    y_field: Option<&str>,
) -> (Vec<String>, Vec<f64>) {
    let mut categories = Vec::with_capacity(result.data.len());
    let mut values = Vec::with_capacity(result.data.len());

    for row in &result.data {
        categories.push(coerce_label(row.get(x_field)));
        values.push(coerce_number(y_field.and_then(|key| row.get(key))));
    }

    (categories, values)
}

/// Name for a single-series chart: the value column label, else the title
pub(crate) fn series_name(y_label: Option<&str>, title: &str) -> String {
    y_label.unwrap_or(title).to_string()
}

/// Lenient numeric coercion: numbers pass through, bools become 0/1, strings
/// are parsed, everything else (and NaN) becomes 0.
pub(crate) fn coerce_number(value: Option<&serde_json::Value>) -> f64 {
    use serde_json::Value;

    let number = match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    };

    if number.is_nan() {
        0.0
    } else {
        number
    }
}

/// Category label for a cell: strings verbatim, other scalars rendered
/// without quotes, null/missing as empty.
pub(crate) fn coerce_label(value: Option<&serde_json::Value>) -> String {
    use serde_json::Value;

    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use ar_core::{FieldType, ReportResult, ResultHeader, ResultMetadata, Row};

    /// Result with `category`/`amount` columns and the given cell pairs
    pub fn result_of(rows: &[(serde_json::Value, serde_json::Value)]) -> ReportResult {
        let data = rows
            .iter()
            .map(|(category, amount)| {
                let mut row = Row::new();
                row.insert("category".to_string(), category.clone());
                row.insert("amount".to_string(), amount.clone());
                row
            })
            .collect();

        ReportResult {
            headers: vec![
                ResultHeader {
                    key: "category".to_string(),
                    label: "Category".to_string(),
                    data_type: FieldType::String,
                    format: None,
                },
                ResultHeader {
                    key: "amount".to_string(),
                    label: "Amount".to_string(),
                    data_type: FieldType::Number,
                    format: None,
                },
            ],
            data,
            metadata: ResultMetadata {
                total_rows: rows.len() as u64,
                execution_time_ms: 1,
                generated_at: chrono::Utc::now(),
                filters_applied: None,
                page: None,
            },
        }
    }
}
