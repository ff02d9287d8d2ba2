//! HTTP client for the report execution service

use serde::{Deserialize, Serialize};

use ar_core::{
    ExportFile, ExportFormat, ReportDefinition, ReportExecution, ReportFilter, ReportId,
    ReportStore,
};

use crate::http::HttpClient;

/// Report definitions and execution over REST
pub struct HttpReportStore {
    http: HttpClient,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    filters: &'a [ReportFilter],
}

#[derive(Deserialize)]
struct FavoriteResponse {
    is_favorite: bool,
}

impl HttpReportStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait::async_trait]
impl ReportStore for HttpReportStore {
    async fn create(&self, definition: &ReportDefinition) -> anyhow::Result<ReportDefinition> {
        tracing::info!(code = %definition.code, "creating report definition");
        Ok(self.http.post("/api/reports", definition).await?)
    }

    async fn update(&self, definition: &ReportDefinition) -> anyhow::Result<ReportDefinition> {
        let id = definition
            .id
            .ok_or_else(|| anyhow::anyhow!("cannot update an unsaved report definition"))?;
        Ok(self
            .http
            .put(&format!("/api/reports/{id}"), definition)
            .await?)
    }

    async fn get(&self, id: ReportId) -> anyhow::Result<ReportDefinition> {
        Ok(self.http.get(&format!("/api/reports/{id}")).await?)
    }

    async fn list(&self) -> anyhow::Result<Vec<ReportDefinition>> {
        Ok(self.http.get("/api/reports").await?)
    }

    async fn delete(&self, id: ReportId) -> anyhow::Result<()> {
        tracing::info!(%id, "deleting report definition");
        Ok(self.http.delete(&format!("/api/reports/{id}")).await?)
    }

    async fn clone_definition(&self, id: ReportId) -> anyhow::Result<ReportDefinition> {
        Ok(self
            .http
            .post(&format!("/api/reports/{id}/clone"), &serde_json::json!({}))
            .await?)
    }

    async fn toggle_favorite(&self, id: ReportId) -> anyhow::Result<bool> {
        let response: FavoriteResponse = self
            .http
            .post(&format!("/api/reports/{id}/favorite"), &serde_json::json!({}))
            .await?;
        Ok(response.is_favorite)
    }

    async fn execute(
        &self,
        id: ReportId,
        overrides: &[ReportFilter],
    ) -> anyhow::Result<ReportExecution> {
        tracing::info!(%id, overrides = overrides.len(), "executing report");
        Ok(self
            .http
            .post(
                &format!("/api/reports/{id}/execute"),
                &ExecuteRequest { filters: overrides },
            )
            .await?)
    }

    async fn export(&self, id: ReportId, format: ExportFormat) -> anyhow::Result<ExportFile> {
        let response = self
            .http
            .get_raw(&format!("/api/reports/{id}/export?format={}", format.extension()))
            .await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await.map_err(crate::ServiceError::from)?;

        Ok(ExportFile {
            file_name: format!("report_{id}.{}", format.extension()),
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
