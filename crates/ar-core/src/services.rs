//! Service traits consumed by the engines
//!
//! The backing services are REST-shaped; the traits live here so the model
//! crates depend on the seam rather than any transport. HTTP implementations
//! are in `ar-data`.

use serde::{Deserialize, Serialize};

use crate::dashboard::{Dashboard, DashboardId, Widget, WidgetId};
use crate::report::{ReportDefinition, ReportFilter, ReportId};
use crate::result::{FieldType, ReportResult};

/// A selectable table exposed by schema introspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub table_name: String,
    pub form_code: String,
    pub form_id: i64,
    pub form_title: String,
}

/// A typed field of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// A stored definition together with its execution result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExecution {
    pub definition: ReportDefinition,
    pub result: ReportResult,
}

/// File formats the backend can export a report to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }
}

/// A downloadable export artifact
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Exposes available tables and their typed fields
#[async_trait::async_trait]
pub trait SchemaIntrospection: Send + Sync {
    async fn list_tables(&self) -> anyhow::Result<Vec<TableSummary>>;

    async fn list_fields(&self, table_name: &str) -> anyhow::Result<Vec<FieldSummary>>;
}

/// Stores and executes report definitions
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a new definition; returns the stored copy with its id
    async fn create(&self, definition: &ReportDefinition) -> anyhow::Result<ReportDefinition>;

    async fn update(&self, definition: &ReportDefinition) -> anyhow::Result<ReportDefinition>;

    async fn get(&self, id: ReportId) -> anyhow::Result<ReportDefinition>;

    async fn list(&self) -> anyhow::Result<Vec<ReportDefinition>>;

    async fn delete(&self, id: ReportId) -> anyhow::Result<()>;

    /// Duplicate a stored definition; returns the copy
    async fn clone_definition(&self, id: ReportId) -> anyhow::Result<ReportDefinition>;

    /// Flip the favorite flag; returns the new state
    async fn toggle_favorite(&self, id: ReportId) -> anyhow::Result<bool>;

    /// Execute by id. Runtime `overrides` are merged over the stored filters
    /// by the backend.
    async fn execute(
        &self,
        id: ReportId,
        overrides: &[ReportFilter],
    ) -> anyhow::Result<ReportExecution>;

    /// Request a file artifact for download
    async fn export(&self, id: ReportId, format: ExportFormat) -> anyhow::Result<ExportFile>;
}

/// Persists dashboards and their widgets
#[async_trait::async_trait]
pub trait DashboardStore: Send + Sync {
    async fn create(&self, dashboard: &Dashboard) -> anyhow::Result<Dashboard>;

    async fn update(&self, dashboard: &Dashboard) -> anyhow::Result<Dashboard>;

    async fn get(&self, id: DashboardId) -> anyhow::Result<Dashboard>;

    async fn list(&self) -> anyhow::Result<Vec<Dashboard>>;

    async fn delete(&self, id: DashboardId) -> anyhow::Result<()>;

    async fn add_widget(&self, dashboard_id: DashboardId, widget: &Widget) -> anyhow::Result<()>;

    async fn update_widget(&self, dashboard_id: DashboardId, widget: &Widget)
        -> anyhow::Result<()>;

    async fn remove_widget(
        &self,
        dashboard_id: DashboardId,
        widget_id: WidgetId,
    ) -> anyhow::Result<()>;

    /// Replace the whole layout blob
    async fn replace_layout(
        &self,
        dashboard_id: DashboardId,
        layout: &serde_json::Value,
    ) -> anyhow::Result<()>;
}
