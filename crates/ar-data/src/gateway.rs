//! Report execution gateway
//!
//! Turns a draft or a saved definition into an executed result. Preview
//! persists the draft as a real throwaway definition before executing it;
//! the backend has no dry-run endpoint. Every result leaving the gateway has
//! its keys normalized to lower case.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;

use ar_core::{
    ExportFile, ExportFormat, ReportDefinition, ReportExecution, ReportFilter, ReportId,
    ReportStore, ValidationError,
};

/// Orchestrates preview/save/execute/export over the report store
pub struct ReportGateway {
    store: Arc<dyn ReportStore>,
}

impl ReportGateway {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Persist the draft under a synthetic `preview_` code, then execute it
    /// once and return the result.
    pub async fn preview(&self, draft: &ReportDefinition) -> anyhow::Result<ReportExecution> {
        if draft.fields.is_empty() {
            return Err(ValidationError::NoFields.into());
        }

        let mut definition = draft.clone();
        definition.code = format!("preview_{}", Utc::now().timestamp_millis());
        tracing::info!(code = %definition.code, "persisting preview definition");

        let stored = self.store.create(&definition).await?;
        let id = stored
            .id
            .context("backend returned a stored definition without an id")?;

        let mut execution = self.store.execute(id, &[]).await?;
        execution.result.normalize_keys();
        Ok(execution)
    }

    /// Persist the draft permanently. The code is derived from the name:
    /// lower-cased, whitespace runs replaced with underscores.
    pub async fn save(&self, draft: &ReportDefinition) -> anyhow::Result<ReportDefinition> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        if draft.fields.is_empty() {
            return Err(ValidationError::NoFields.into());
        }
        draft.validate()?;

        let mut definition = draft.clone();
        definition.code = derive_code(&definition.name);
        tracing::info!(code = %definition.code, "saving report definition");

        let stored = if definition.id.is_some() {
            self.store.update(&definition).await?
        } else {
            self.store.create(&definition).await?
        };
        Ok(stored)
    }

    /// Execute a stored definition; runtime filters are merged over the
    /// stored ones by the backend.
    pub async fn execute(
        &self,
        id: ReportId,
        overrides: &[ReportFilter],
    ) -> anyhow::Result<ReportExecution> {
        let mut execution = self.store.execute(id, overrides).await?;
        execution.result.normalize_keys();
        Ok(execution)
    }

    /// Request a file artifact; no in-engine transformation
    pub async fn export(&self, id: ReportId, format: ExportFormat) -> anyhow::Result<ExportFile> {
        self.store.export(id, format).await
    }
}

fn derive_code(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use serde_json::json;
    use uuid::Uuid;

    use ar_core::{
        FieldType, ReportDataSource, ReportField, ReportResult, ReportType, ResultHeader,
        ResultMetadata, Row,
    };

    /// In-memory report store recording every call
    #[derive(Default)]
    struct FakeStore {
        created: Mutex<Vec<ReportDefinition>>,
        executed: Mutex<Vec<ReportId>>,
    }

    #[async_trait::async_trait]
    impl ReportStore for FakeStore {
        async fn create(&self, definition: &ReportDefinition) -> anyhow::Result<ReportDefinition> {
            let mut stored = definition.clone();
            stored.id = Some(Uuid::new_v4());
            self.created.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn update(&self, definition: &ReportDefinition) -> anyhow::Result<ReportDefinition> {
            Ok(definition.clone())
        }

        async fn get(&self, _id: ReportId) -> anyhow::Result<ReportDefinition> {
            anyhow::bail!("not used")
        }

        async fn list(&self) -> anyhow::Result<Vec<ReportDefinition>> {
            Ok(self.created.lock().unwrap().clone())
        }

        async fn delete(&self, _id: ReportId) -> anyhow::Result<()> {
            Ok(())
        }

        async fn clone_definition(&self, _id: ReportId) -> anyhow::Result<ReportDefinition> {
            anyhow::bail!("not used")
        }

        async fn toggle_favorite(&self, _id: ReportId) -> anyhow::Result<bool> {
            Ok(true)
        }

        async fn execute(
            &self,
            id: ReportId,
            _overrides: &[ReportFilter],
        ) -> anyhow::Result<ReportExecution> {
            self.executed.lock().unwrap().push(id);

            let definition = self
                .created
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id == Some(id))
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("executed before create"))?;

            let mut row = Row::new();
            row.insert("Status".to_string(), json!("active"));
            row.insert("Task_Count".to_string(), json!(3));

            Ok(ReportExecution {
                definition,
                result: ReportResult {
                    headers: vec![
                        ResultHeader {
                            key: "Status".to_string(),
                            label: "Status".to_string(),
                            data_type: FieldType::String,
                            format: None,
                        },
                        ResultHeader {
                            key: "Task_Count".to_string(),
                            label: "Task Count".to_string(),
                            data_type: FieldType::Number,
                            format: None,
                        },
                    ],
                    data: vec![row],
                    metadata: ResultMetadata {
                        total_rows: 1,
                        execution_time_ms: 2,
                        generated_at: Utc::now(),
                        filters_applied: None,
                        page: None,
                    },
                },
            })
        }

        async fn export(&self, id: ReportId, format: ExportFormat) -> anyhow::Result<ExportFile> {
            Ok(ExportFile {
                file_name: format!("report_{id}.{}", format.extension()),
                content_type: "text/csv".to_string(),
                bytes: b"a,b\n1,2\n".to_vec(),
            })
        }
    }

    fn draft_with_field(name: &str) -> ReportDefinition {
        let mut draft = ReportDefinition::new(ReportType::Table);
        draft.name = name.to_string();
        draft.data_sources.push(ReportDataSource {
            alias: "data".to_string(),
            table_name: "projects".to_string(),
            join_type: None,
            join_condition: None,
        });
        draft.fields.push(ReportField {
            field_name: "status".to_string(),
            alias: "Status".to_string(),
            data_source: "data".to_string(),
            aggregate: None,
            is_visible: true,
            order: 1,
        });
        draft
    }

    #[tokio::test]
    async fn test_preview_persists_then_executes() {
        let store = Arc::new(FakeStore::default());
        let gateway = ReportGateway::new(store.clone());

        let execution = gateway.preview(&draft_with_field("draft")).await.unwrap();

        let created = store.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert!(created[0].code.starts_with("preview_"));
        assert_eq!(store.executed.lock().unwrap().len(), 1);

        // Keys are normalized before the result leaves the gateway
        assert_eq!(execution.result.headers[1].key, "task_count");
        assert!(execution.result.data[0].contains_key("status"));
    }

    #[tokio::test]
    async fn test_preview_requires_fields() {
        let gateway = ReportGateway::new(Arc::new(FakeStore::default()));
        let mut draft = draft_with_field("draft");
        draft.fields.clear();

        let err = gateway.preview(&draft).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NoFields)
        );
    }

    #[tokio::test]
    async fn test_save_derives_code_from_name() {
        let store = Arc::new(FakeStore::default());
        let gateway = ReportGateway::new(store.clone());

        let stored = gateway
            .save(&draft_with_field("  Monthly  Task Load "))
            .await
            .unwrap();

        assert_eq!(stored.code, "monthly_task_load");
        assert!(stored.id.is_some());
    }

    #[tokio::test]
    async fn test_save_requires_name() {
        let gateway = ReportGateway::new(Arc::new(FakeStore::default()));
        let mut draft = draft_with_field("");
        draft.name = "   ".to_string();

        let err = gateway.save(&draft).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::MissingName)
        );
    }

    #[tokio::test]
    async fn test_execute_normalizes_keys() {
        let store = Arc::new(FakeStore::default());
        let gateway = ReportGateway::new(store.clone());
        let stored = gateway.save(&draft_with_field("r")).await.unwrap();

        let execution = gateway.execute(stored.id.unwrap(), &[]).await.unwrap();

        let keys: Vec<&String> = execution.result.data[0].keys().collect();
        assert_eq!(keys, vec!["status", "task_count"]);
    }
}
