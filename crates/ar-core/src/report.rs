//! Report definition model
//!
//! A report definition is a declarative description of a tabular or chart query over
//! one or more aliased data sources. Definitions are composed in memory by
//! the builder session and become durable only when the gateway saves them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ValidationError;

/// Unique identifier for a stored report definition
pub type ReportId = Uuid;

/// The output family of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Table,
    Chart,
    Kpi,
    Pivot,
}

/// Chart families understood by the transform engine.
///
/// `Other` absorbs unrecognized wire values; the transform falls back to a
/// bar chart for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Scatter,
    Pie,
    Doughnut,
    Other,
}

impl From<String> for ChartType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "bar" => ChartType::Bar,
            "line" => ChartType::Line,
            "area" => ChartType::Area,
            "scatter" => ChartType::Scatter,
            "pie" => ChartType::Pie,
            "doughnut" => ChartType::Doughnut,
            _ => ChartType::Other,
        }
    }
}

/// Aggregate functions applicable to a report field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aggregate {
    Sum,
    Avg,
    Count,
    Min,
    Max,
}

/// Filter comparison operators, including the relative date ranges the
/// backend resolves at execution time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
    Between,
    ThisMonth,
    ThisWeek,
    ThisYear,
    LastMonth,
    LastWeek,
    LastYear,
}

/// Boolean connective between adjacent filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOp {
    And,
    Or,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Join type between data sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// A named binding (alias) to an underlying table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDataSource {
    /// Alias the fields/filters/sorting refer to. Must be unique within a
    /// definition.
    pub alias: String,

    /// Underlying table name
    pub table_name: String,

    /// How this source joins the previous ones, if it is not the primary
    pub join_type: Option<JoinType>,

    /// Join condition, verbatim for the backend
    pub join_condition: Option<String>,
}

/// A selected output column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportField {
    /// Column name in the underlying table
    pub field_name: String,

    /// Display label
    pub alias: String,

    /// Data source alias this field reads from
    pub data_source: String,

    /// Optional aggregate applied by the backend
    pub aggregate: Option<Aggregate>,

    /// Hidden fields participate in the query but not the output
    pub is_visible: bool,

    /// 1-based display order
    pub order: u32,
}

/// A filter condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub field_name: String,

    /// Data source alias the filter applies to
    pub data_source: String,

    pub operator: FilterOperator,

    /// Comparison value; arrays for `in`/`between`, ignored for the relative
    /// date operators
    pub value: serde_json::Value,

    /// Connective to the preceding filter
    pub logical_op: LogicalOp,

    /// Optional group id for parenthesized compound expressions
    pub group: Option<u32>,
}

/// A sort instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSort {
    pub field_name: String,
    pub data_source: String,
    pub direction: SortDirection,
    pub order: u32,
}

/// A declarative report: data sources, output fields, filters and sorting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDefinition {
    /// Backend-assigned id; `None` until first persisted
    pub id: Option<ReportId>,

    /// Stable machine code, derived from the name on save
    pub code: String,

    pub name: String,

    pub description: Option<String>,

    pub report_type: ReportType,

    /// Chart family, for chart reports
    pub chart_type: Option<ChartType>,

    pub data_sources: Vec<ReportDataSource>,

    pub fields: Vec<ReportField>,

    pub filters: Vec<ReportFilter>,

    pub sorting: Vec<ReportSort>,

    pub is_favorite: bool,
}

impl ReportDefinition {
    /// Create an empty draft of the given type
    pub fn new(report_type: ReportType) -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            description: None,
            report_type,
            chart_type: None,
            data_sources: Vec::new(),
            fields: Vec::new(),
            filters: Vec::new(),
            sorting: Vec::new(),
            is_favorite: false,
        }
    }

    /// Check referential integrity: source aliases are unique and every
    /// field/filter/sort names a declared alias.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut aliases: Vec<&str> = Vec::with_capacity(self.data_sources.len());
        for source in &self.data_sources {
            if aliases.contains(&source.alias.as_str()) {
                return Err(ValidationError::DuplicateAlias {
                    alias: source.alias.clone(),
                });
            }
            aliases.push(&source.alias);
        }

        let referenced = self
            .fields
            .iter()
            .map(|f| f.data_source.as_str())
            .chain(self.filters.iter().map(|f| f.data_source.as_str()))
            .chain(self.sorting.iter().map(|s| s.data_source.as_str()));
        for alias in referenced {
            if !aliases.contains(&alias) {
                return Err(ValidationError::UnknownDataSource {
                    alias: alias.to_string(),
                });
            }
        }

        Ok(())
    }
}
