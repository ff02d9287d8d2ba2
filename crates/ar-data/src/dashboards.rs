//! HTTP client for the dashboard persistence service

use ar_core::{Dashboard, DashboardId, DashboardStore, Widget, WidgetId};

use crate::http::HttpClient;

/// Dashboard persistence over REST
pub struct HttpDashboardStore {
    http: HttpClient,
}

impl HttpDashboardStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }
}

#[async_trait::async_trait]
impl DashboardStore for HttpDashboardStore {
    async fn create(&self, dashboard: &Dashboard) -> anyhow::Result<Dashboard> {
        tracing::info!(name = %dashboard.name, "creating dashboard");
        Ok(self.http.post("/api/dashboards", dashboard).await?)
    }

    async fn update(&self, dashboard: &Dashboard) -> anyhow::Result<Dashboard> {
        let id = dashboard
            .id
            .ok_or_else(|| anyhow::anyhow!("cannot update an unsaved dashboard"))?;
        Ok(self
            .http
            .put(&format!("/api/dashboards/{id}"), dashboard)
            .await?)
    }

    async fn get(&self, id: DashboardId) -> anyhow::Result<Dashboard> {
        Ok(self.http.get(&format!("/api/dashboards/{id}")).await?)
    }

    async fn list(&self) -> anyhow::Result<Vec<Dashboard>> {
        Ok(self.http.get("/api/dashboards").await?)
    }

    async fn delete(&self, id: DashboardId) -> anyhow::Result<()> {
        tracing::info!(%id, "deleting dashboard");
        Ok(self.http.delete(&format!("/api/dashboards/{id}")).await?)
    }

    async fn add_widget(&self, dashboard_id: DashboardId, widget: &Widget) -> anyhow::Result<()> {
        Ok(self
            .http
            .post_unit(&format!("/api/dashboards/{dashboard_id}/widgets"), widget)
            .await?)
    }

    async fn update_widget(
        &self,
        dashboard_id: DashboardId,
        widget: &Widget,
    ) -> anyhow::Result<()> {
        Ok(self
            .http
            .put_unit(
                &format!("/api/dashboards/{dashboard_id}/widgets/{}", widget.id),
                widget,
            )
            .await?)
    }

    async fn remove_widget(
        &self,
        dashboard_id: DashboardId,
        widget_id: WidgetId,
    ) -> anyhow::Result<()> {
        Ok(self
            .http
            .delete(&format!("/api/dashboards/{dashboard_id}/widgets/{widget_id}"))
            .await?)
    }

    async fn replace_layout(
        &self,
        dashboard_id: DashboardId,
        layout: &serde_json::Value,
    ) -> anyhow::Result<()> {
        Ok(self
            .http
            .put_unit(&format!("/api/dashboards/{dashboard_id}/layout"), layout)
            .await?)
    }
}
