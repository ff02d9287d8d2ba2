//! Dashboard editor
//!
//! Owns one dashboard and its grid. Adding a widget never refuses: when no
//! free slot exists the widget is still created at the origin and may
//! overlap. Manual position/size edits are accepted without overlap
//! re-validation, matching the drag/resize surface that relies on visual
//! correction.

use anyhow::Context;

use ar_core::{
    Dashboard, DashboardStore, GridRect, Widget, WidgetChange, WidgetConfig, WidgetId,
};

use crate::grid::GridLayout;

/// What a new widget is created from; the editor picks the position
#[derive(Debug, Clone)]
pub struct WidgetTemplate {
    pub title: String,
    pub description: Option<String>,
    pub config: WidgetConfig,
    pub w: u32,
    pub h: u32,
    pub refresh_interval: Option<u32>,
}

/// In-memory editing session for one dashboard
pub struct DashboardEditor {
    dashboard: Dashboard,
    grid: GridLayout,
    selected: Option<WidgetId>,
}

impl DashboardEditor {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            grid: GridLayout::default(),
            selected: None,
        }
    }

    pub fn with_grid(dashboard: Dashboard, grid: GridLayout) -> Self {
        Self {
            dashboard,
            grid,
            selected: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn grid(&self) -> GridLayout {
        self.grid
    }

    /// The widget currently open for configuration
    pub fn selected(&self) -> Option<WidgetId> {
        self.selected
    }

    /// Create a widget from the template at the first free slot and select
    /// it. When the grid has no free slot the widget is placed at the origin
    /// anyway, overlapping whatever is there.
    pub fn add_widget(&mut self, template: WidgetTemplate) -> WidgetId {
        let WidgetTemplate {
            title,
            description,
            config,
            w,
            h,
            refresh_interval,
        } = template;

        let (x, y) = match self.grid.find_position(&self.dashboard.widgets, w, h) {
            Some(origin) => origin,
            None => {
                tracing::warn!(w, h, "no free slot on the grid, placing at origin with overlap");
                (0, 0)
            }
        };

        let mut widget = Widget::new(title, config, GridRect::new(x, y, w, h));
        widget.description = description;
        widget.refresh_interval = refresh_interval;
        let id = widget.id;

        tracing::debug!(%id, x, y, w, h, "widget added");
        self.dashboard.widgets.push(widget);
        self.selected = Some(id);
        id
    }

    /// Remove a widget by id; clears the selection if it pointed at it
    pub fn remove_widget(&mut self, id: WidgetId) {
        self.dashboard.widgets.retain(|widget| widget.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Apply a field-level change to the matching widget. Returns `false`
    /// (touching nothing) for an unknown id. Position changes are not
    /// checked for overlap.
    pub fn update_widget(&mut self, id: WidgetId, change: WidgetChange) -> bool {
        match self.dashboard.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => {
                widget.apply(change);
                true
            }
            None => false,
        }
    }

    /// Replace the opaque renderer layout blob
    pub fn set_layout(&mut self, layout: serde_json::Value) {
        self.dashboard.layout = layout;
    }

    /// Persist the whole dashboard, every widget plus the layout blob, in
    /// one explicit save. There is no per-widget incremental write.
    pub async fn save(&mut self, store: &dyn DashboardStore) -> anyhow::Result<()> {
        let stored = if self.dashboard.id.is_some() {
            store.update(&self.dashboard).await?
        } else {
            store.create(&self.dashboard).await?
        };
        self.dashboard = stored;

        let id = self
            .dashboard
            .id
            .context("backend returned a dashboard without an id")?;
        store.replace_layout(id, &self.dashboard.layout).await?;

        tracing::info!(%id, widgets = self.dashboard.widgets.len(), "dashboard saved");
        Ok(())
    }
}
