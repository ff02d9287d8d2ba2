//! Core model and in-memory engines for the analytics reporting platform
//!
//! This crate provides the report/dashboard data model, the report builder
//! session, and the service traits implemented by the data layer.

pub mod builder;
pub mod dashboard;
pub mod report;
pub mod result;
pub mod services;

use thiserror::Error;

// Re-export commonly used types
pub use builder::{BuilderSession, WizardStep};
pub use dashboard::{Dashboard, DashboardId, GridRect, Widget, WidgetChange, WidgetConfig, WidgetId};
pub use report::{
    Aggregate, ChartType, FilterOperator, JoinType, LogicalOp, ReportDataSource, ReportDefinition,
    ReportField, ReportFilter, ReportId, ReportSort, ReportType, SortDirection,
};
pub use result::{FieldType, ReportResult, ResultHeader, ResultMetadata, Row};
pub use services::{
    DashboardStore, ExportFile, ExportFormat, FieldSummary, ReportExecution, ReportStore,
    SchemaIntrospection, TableSummary,
};

/// Errors raised by draft validation before save/preview
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("report name is required")]
    MissingName,

    #[error("at least one field must be selected")]
    NoFields,

    #[error("unknown data source alias '{alias}'")]
    UnknownDataSource { alias: String },

    #[error("duplicate data source alias '{alias}'")]
    DuplicateAlias { alias: String },

    #[error("row keys do not match result headers")]
    ShapeMismatch,
}
