//! Dashboard and widget model
//!
//! A dashboard is a collection of typed widgets positioned on a bounded cell
//! grid, persisted atomically together with an opaque layout blob.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::report::ReportId;

/// Unique identifier for a stored dashboard
pub type DashboardId = Uuid;

/// Unique identifier for a widget
pub type WidgetId = Uuid;

/// A widget's rectangle on the grid, in cells. Covers the half-open area
/// `[x, x+w) × [y, y+h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridRect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether two rectangles share any cell
    pub fn intersects(&self, other: &GridRect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Variant-specific widget configuration.
///
/// Chart, table and KPI widgets render an executed report; text and iframe
/// widgets carry their own content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetConfig {
    Chart { report_id: Option<ReportId> },
    Table { report_id: Option<ReportId> },
    Kpi { report_id: Option<ReportId> },
    Text { content: String },
    Iframe { url: String },
}

impl WidgetConfig {
    /// Wire name of the widget type
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetConfig::Chart { .. } => "chart",
            WidgetConfig::Table { .. } => "table",
            WidgetConfig::Kpi { .. } => "kpi",
            WidgetConfig::Text { .. } => "text",
            WidgetConfig::Iframe { .. } => "iframe",
        }
    }

    /// The bound report, for the report-backed variants
    pub fn report_id(&self) -> Option<ReportId> {
        match self {
            WidgetConfig::Chart { report_id }
            | WidgetConfig::Table { report_id }
            | WidgetConfig::Kpi { report_id } => *report_id,
            WidgetConfig::Text { .. } | WidgetConfig::Iframe { .. } => None,
        }
    }
}

/// A positioned, typed visual element on a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,

    pub title: String,

    pub description: Option<String>,

    pub position: GridRect,

    pub config: WidgetConfig,

    /// Seconds between automatic re-executions; `None` disables refresh
    pub refresh_interval: Option<u32>,
}

impl Widget {
    /// Create a widget with a fresh id
    pub fn new(title: impl Into<String>, config: WidgetConfig, position: GridRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            position,
            config,
            refresh_interval: None,
        }
    }

    /// Apply a single field-level change.
    ///
    /// `ReportBinding` only touches the report-backed config variants; on
    /// text/iframe widgets it leaves the config as is.
    pub fn apply(&mut self, change: WidgetChange) {
        match change {
            WidgetChange::Title(title) => self.title = title,
            WidgetChange::Description(description) => self.description = description,
            WidgetChange::Position(position) => self.position = position,
            WidgetChange::Config(config) => self.config = config,
            WidgetChange::RefreshInterval(interval) => self.refresh_interval = interval,
            WidgetChange::ReportBinding(report_id) => match &mut self.config {
                WidgetConfig::Chart { report_id: slot }
                | WidgetConfig::Table { report_id: slot }
                | WidgetConfig::Kpi { report_id: slot } => *slot = report_id,
                WidgetConfig::Text { .. } | WidgetConfig::Iframe { .. } => {}
            },
        }
    }
}

/// A field-level widget update
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetChange {
    Title(String),
    Description(Option<String>),
    Position(GridRect),
    Config(WidgetConfig),
    ReportBinding(Option<ReportId>),
    RefreshInterval(Option<u32>),
}

/// A dashboard: widgets plus the opaque persisted layout blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Backend-assigned id; `None` until first persisted
    pub id: Option<DashboardId>,

    pub code: String,

    pub name: String,

    pub widgets: Vec<Widget>,

    /// Opaque renderer layout state, persisted verbatim
    pub layout: serde_json::Value,

    pub is_default: bool,

    pub is_public: bool,

    pub tags: Vec<String>,
}

impl Dashboard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            code: String::new(),
            name: name.into(),
            widgets: Vec::new(),
            layout: serde_json::Value::Null,
            is_default: false,
            is_public: false,
            tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersection() {
        let a = GridRect::new(0, 0, 6, 4);
        let b = GridRect::new(6, 0, 6, 4);
        let c = GridRect::new(5, 3, 2, 2);

        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn test_widget_config_wire_shape() {
        let config = WidgetConfig::Iframe {
            url: "https://example.com/weather".to_string(),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "iframe");
        assert_eq!(value["url"], "https://example.com/weather");
    }

    #[test]
    fn test_report_binding_skips_text_widgets() {
        let mut widget = Widget::new(
            "Notes",
            WidgetConfig::Text {
                content: "hello".to_string(),
            },
            GridRect::new(0, 0, 2, 2),
        );

        widget.apply(WidgetChange::ReportBinding(Some(Uuid::new_v4())));

        assert_eq!(
            widget.config,
            WidgetConfig::Text {
                content: "hello".to_string()
            }
        );
    }
}
