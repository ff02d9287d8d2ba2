//! KPI value extraction

use ar_core::ReportResult;

/// The single value a KPI widget displays: the first column of the first
/// row, or `Null` when the result is empty.
pub fn kpi_value(result: &ReportResult) -> serde_json::Value {
    let key = match result.headers.first() {
        Some(header) => &header.key,
        None => return serde_json::Value::Null,
    };

    result
        .data
        .first()
        .and_then(|row| row.get(key))
        .cloned()
        .unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::result_of;
    use serde_json::json;

    #[test]
    fn test_first_cell_wins() {
        let result = result_of(&[(json!(42), json!(1)), (json!(7), json!(2))]);
        assert_eq!(kpi_value(&result), json!(42));
    }

    #[test]
    fn test_empty_result_is_null() {
        let result = result_of(&[]);
        assert_eq!(kpi_value(&result), serde_json::Value::Null);
    }
}
