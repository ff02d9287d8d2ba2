//! HTTP client for the schema introspection service

use ar_core::{FieldSummary, SchemaIntrospection, TableSummary};

use crate::http::HttpClient;

/// Schema introspection over REST
pub struct HttpSchemaService {
    http: HttpClient,
}

impl HttpSchemaService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait::async_trait]
impl SchemaIntrospection for HttpSchemaService {
    async fn list_tables(&self) -> anyhow::Result<Vec<TableSummary>> {
        tracing::debug!("listing reportable tables");
        Ok(self.http.get("/api/schema/tables").await?)
    }

    async fn list_fields(&self, table_name: &str) -> anyhow::Result<Vec<FieldSummary>> {
        tracing::debug!(table = table_name, "listing table fields");
        Ok(self
            .http
            .get(&format!("/api/schema/tables/{table_name}/fields"))
            .await?)
    }
}
