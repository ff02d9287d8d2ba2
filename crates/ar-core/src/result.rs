//! Tabular execution results
//!
//! A `ReportResult` is what the execution backend returns for any report:
//! typed headers plus rows keyed by header key. Downstream renderers treat
//! keys case-insensitively, so the gateway normalizes every result to
//! lower-case keys before anything consumes it.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Logical type of a result column or table field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldType {
    String,
    Number,
    Date,
    Boolean,
    Other,
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => FieldType::String,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "boolean" => FieldType::Boolean,
            _ => FieldType::Other,
        }
    }
}

/// One result row; an ordered map so column order survives round trips
pub type Row = IndexMap<String, serde_json::Value>;

/// A result column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultHeader {
    /// Key into each row
    pub key: String,

    /// Display label
    pub label: String,

    pub data_type: FieldType,

    /// Optional display format hint (e.g. a date pattern)
    pub format: Option<String>,
}

/// Execution metadata attached to every result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub total_rows: u64,
    pub execution_time_ms: u64,
    pub generated_at: DateTime<Utc>,
    pub filters_applied: Option<u32>,
    pub page: Option<u32>,
}

/// Tabular result of executing a report definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub headers: Vec<ResultHeader>,
    pub data: Vec<Row>,
    pub metadata: ResultMetadata,
}

impl ReportResult {
    /// Lower-case every header key and row key in place, preserving column
    /// order. Applied once per fetched result, at the gateway boundary.
    pub fn normalize_keys(&mut self) {
        for header in &mut self.headers {
            header.key = header.key.to_lowercase();
        }

        for row in &mut self.data {
            let normalized: Row = row
                .iter()
                .map(|(key, value)| (key.to_lowercase(), value.clone()))
                .collect();
            *row = normalized;
        }
    }

    /// Check that every row's key set matches the header key set
    pub fn validate_shape(&self) -> Result<(), ValidationError> {
        let header_keys: std::collections::HashSet<&str> =
            self.headers.iter().map(|h| h.key.as_str()).collect();

        for row in &self.data {
            if row.len() != header_keys.len()
                || !row.keys().all(|key| header_keys.contains(key.as_str()))
            {
                return Err(ValidationError::ShapeMismatch);
            }
        }

        Ok(())
    }
}
