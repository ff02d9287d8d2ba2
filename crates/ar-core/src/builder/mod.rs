//! Report builder session
//!
//! One owned draft plus the wizard state and the field metadata fetched for
//! the selected table. Every mutation is a synchronous method on the owned
//! value; validation beyond field-name dedup is deferred to preview/save.

mod wizard;

pub use wizard::WizardStep;

use crate::report::{
    ChartType, FilterOperator, LogicalOp, ReportDataSource, ReportDefinition, ReportField,
    ReportFilter, ReportSort, ReportType, SortDirection,
};
use crate::services::{FieldSummary, SchemaIntrospection, TableSummary};
use crate::ValidationError;

/// Alias of the primary data source selected through the wizard
pub const PRIMARY_ALIAS: &str = "data";

/// In-memory draft of a report being composed
pub struct BuilderSession {
    draft: ReportDefinition,
    selected_table: Option<TableSummary>,
    available_fields: Vec<FieldSummary>,
    step: WizardStep,
}

impl BuilderSession {
    /// Start an empty draft of the given type
    pub fn new(report_type: ReportType) -> Self {
        Self {
            draft: ReportDefinition::new(report_type),
            selected_table: None,
            available_fields: Vec::new(),
            step: WizardStep::Info,
        }
    }

    pub fn draft(&self) -> &ReportDefinition {
        &self.draft
    }

    /// Consume the session, yielding the draft for the gateway
    pub fn into_draft(self) -> ReportDefinition {
        self.draft
    }

    pub fn selected_table(&self) -> Option<&TableSummary> {
        self.selected_table.as_ref()
    }

    pub fn available_fields(&self) -> &[FieldSummary] {
        &self.available_fields
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn next_step(&mut self) {
        self.step = self.step.next();
    }

    pub fn previous_step(&mut self) {
        self.step = self.step.previous();
    }

    /// Select the primary data source.
    ///
    /// Replaces any previous selection, drops fields/filters/sorting that
    /// referred to it, fetches the table's field metadata and advances the
    /// wizard one step.
    pub async fn select_data_source(
        &mut self,
        schema: &dyn SchemaIntrospection,
        table: TableSummary,
    ) -> anyhow::Result<()> {
        tracing::info!(table = %table.table_name, "selecting report data source");

        self.draft.data_sources = vec![ReportDataSource {
            alias: PRIMARY_ALIAS.to_string(),
            table_name: table.table_name.clone(),
            join_type: None,
            join_condition: None,
        }];
        self.draft.fields.clear();
        self.draft.filters.clear();
        self.draft.sorting.clear();

        self.available_fields = schema.list_fields(&table.table_name).await?;
        tracing::debug!(count = self.available_fields.len(), "fetched field metadata");

        self.selected_table = Some(table);
        self.step = self.step.next();
        Ok(())
    }

    /// Append a field. No-op if a field with the same name is already
    /// selected.
    pub fn add_field(&mut self, field_name: &str) {
        if self.draft.fields.iter().any(|f| f.field_name == field_name) {
            return;
        }

        let order = self.draft.fields.len() as u32 + 1;
        self.draft.fields.push(ReportField {
            field_name: field_name.to_string(),
            alias: humanize(field_name),
            data_source: PRIMARY_ALIAS.to_string(),
            aggregate: None,
            is_visible: true,
            order,
        });
    }

    /// Remove the field at `index`. Surviving `order` values are left as
    /// they are; only `move_field` renumbers.
    pub fn remove_field(&mut self, index: usize) {
        if index < self.draft.fields.len() {
            self.draft.fields.remove(index);
        }
    }

    /// Move a field and renumber every field to its dense 1-based position
    pub fn move_field(&mut self, from: usize, to: usize) {
        if from >= self.draft.fields.len() {
            return;
        }

        let field = self.draft.fields.remove(from);
        let to = to.min(self.draft.fields.len());
        self.draft.fields.insert(to, field);

        for (index, field) in self.draft.fields.iter_mut().enumerate() {
            field.order = index as u32 + 1;
        }
    }

    /// Append a filter. The wizard only emits `AND` with no group.
    pub fn add_filter(
        &mut self,
        field_name: &str,
        operator: FilterOperator,
        value: serde_json::Value,
    ) {
        self.draft.filters.push(ReportFilter {
            field_name: field_name.to_string(),
            data_source: PRIMARY_ALIAS.to_string(),
            operator,
            value,
            logical_op: LogicalOp::And,
            group: None,
        });
    }

    pub fn remove_filter(&mut self, index: usize) {
        if index < self.draft.filters.len() {
            self.draft.filters.remove(index);
        }
    }

    pub fn add_sort(&mut self, field_name: &str, direction: SortDirection) {
        let order = self.draft.sorting.len() as u32 + 1;
        self.draft.sorting.push(ReportSort {
            field_name: field_name.to_string(),
            data_source: PRIMARY_ALIAS.to_string(),
            direction,
            order,
        });
    }

    pub fn remove_sort(&mut self, index: usize) {
        if index < self.draft.sorting.len() {
            self.draft.sorting.remove(index);
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.draft.description = description;
    }

    pub fn set_report_type(&mut self, report_type: ReportType) {
        self.draft.report_type = report_type;
    }

    pub fn set_chart_type(&mut self, chart_type: Option<ChartType>) {
        self.draft.chart_type = chart_type;
    }

    /// Save requires a name and at least one field
    pub fn validate_for_save(&self) -> Result<(), ValidationError> {
        if self.draft.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        self.validate_for_preview()
    }

    /// Preview only requires at least one field
    pub fn validate_for_preview(&self) -> Result<(), ValidationError> {
        if self.draft.fields.is_empty() {
            return Err(ValidationError::NoFields);
        }
        Ok(())
    }
}

/// Turn a column name into a display alias: underscores become spaces and
/// each word is capitalized.
fn humanize(field_name: &str) -> String {
    field_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FieldType;
    use serde_json::json;

    struct FakeSchema;

    #[async_trait::async_trait]
    impl SchemaIntrospection for FakeSchema {
        async fn list_tables(&self) -> anyhow::Result<Vec<TableSummary>> {
            Ok(vec![projects_table()])
        }

        async fn list_fields(&self, _table_name: &str) -> anyhow::Result<Vec<FieldSummary>> {
            Ok(vec![
                FieldSummary {
                    name: "status".to_string(),
                    field_type: FieldType::String,
                },
                FieldSummary {
                    name: "task_count".to_string(),
                    field_type: FieldType::Number,
                },
            ])
        }
    }

    fn projects_table() -> TableSummary {
        TableSummary {
            table_name: "projects".to_string(),
            form_code: "prj".to_string(),
            form_id: 7,
            form_title: "Projects".to_string(),
        }
    }

    fn session_with_fields(names: &[&str]) -> BuilderSession {
        let mut session = BuilderSession::new(ReportType::Table);
        for name in names {
            session.add_field(name);
        }
        session
    }

    #[test]
    fn test_add_field_humanizes_alias_and_orders() {
        let session = session_with_fields(&["task_count", "created_at"]);

        let fields = &session.draft().fields;
        assert_eq!(fields[0].alias, "Task Count");
        assert_eq!(fields[0].order, 1);
        assert_eq!(fields[1].alias, "Created At");
        assert_eq!(fields[1].order, 2);
    }

    #[test]
    fn test_add_field_dedupes_by_name() {
        let mut session = session_with_fields(&["status"]);
        session.add_field("status");

        assert_eq!(session.draft().fields.len(), 1);
    }

    #[test]
    fn test_move_field_keeps_orders_dense() {
        let mut session = session_with_fields(&["a", "b", "c", "d"]);

        session.move_field(3, 0);
        session.move_field(1, 2);
        session.move_field(0, 3);

        let orders: Vec<u32> = session.draft().fields.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_field_does_not_renumber() {
        let mut session = session_with_fields(&["a", "b", "c"]);

        session.remove_field(0);

        let orders: Vec<u32> = session.draft().fields.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![2, 3]);
        assert_eq!(session.draft().fields[0].field_name, "b");
    }

    #[test]
    fn test_remove_field_out_of_range_is_noop() {
        let mut session = session_with_fields(&["a"]);
        session.remove_field(5);
        assert_eq!(session.draft().fields.len(), 1);
    }

    #[test]
    fn test_filter_roundtrip_restores_prior_state() {
        let mut session = session_with_fields(&["status"]);
        let before = session.draft().filters.clone();

        session.add_filter("status", FilterOperator::Eq, json!("X"));
        session.remove_filter(0);

        assert_eq!(session.draft().filters, before);
    }

    #[test]
    fn test_add_filter_emits_and_without_group() {
        let mut session = session_with_fields(&["status"]);
        session.add_filter("status", FilterOperator::In, json!(["open", "closed"]));

        let filter = &session.draft().filters[0];
        assert_eq!(filter.logical_op, LogicalOp::And);
        assert_eq!(filter.group, None);
        assert_eq!(filter.data_source, PRIMARY_ALIAS);
    }

    #[test]
    fn test_validation_gates() {
        let mut session = BuilderSession::new(ReportType::Chart);
        assert_eq!(session.validate_for_preview(), Err(ValidationError::NoFields));

        session.add_field("status");
        assert_eq!(session.validate_for_save(), Err(ValidationError::MissingName));

        session.set_name("Task status");
        assert!(session.validate_for_save().is_ok());
    }

    #[tokio::test]
    async fn test_select_data_source_resets_draft_and_advances() {
        let schema = FakeSchema;
        let mut session = BuilderSession::new(ReportType::Table);
        session.add_field("stale");
        session.add_filter("stale", FilterOperator::Eq, json!(1));
        session.add_sort("stale", SortDirection::Asc);

        session
            .select_data_source(&schema, projects_table())
            .await
            .unwrap();

        let draft = session.draft();
        assert_eq!(draft.data_sources.len(), 1);
        assert_eq!(draft.data_sources[0].alias, PRIMARY_ALIAS);
        assert_eq!(draft.data_sources[0].table_name, "projects");
        assert!(draft.fields.is_empty());
        assert!(draft.filters.is_empty());
        assert!(draft.sorting.is_empty());
        assert_eq!(session.available_fields().len(), 2);
        assert_eq!(session.step(), WizardStep::Layout);
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("task_count"), "Task Count");
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("__odd__"), "Odd");
    }
}
