//! Table renderer payload

use serde::Serialize;

use ar_core::{FieldType, ReportResult, Row};

/// One column of the table renderer contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: FieldType,
}

/// What the external table renderer consumes; all keys lower-cased
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePayload {
    pub header: Vec<TableColumn>,
    pub data: Vec<Row>,
}

/// Build the table payload from a result, lower-casing every key
pub fn table_payload(result: &ReportResult) -> TablePayload {
    let header = result
        .headers
        .iter()
        .map(|h| TableColumn {
            key: h.key.to_lowercase(),
            label: h.label.clone(),
            column_type: h.data_type,
        })
        .collect();

    let data = result
        .data
        .iter()
        .map(|row| {
            row.iter()
                .map(|(key, value)| (key.to_lowercase(), value.clone()))
                .collect()
        })
        .collect();

    TablePayload { header, data }
}
