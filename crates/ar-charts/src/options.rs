//! Renderer-agnostic chart option structures
//!
//! The external visualization renderer consumes these serialized with
//! camelCase keys. Only what the transform engine emits is modeled here.

use serde::Serialize;

/// Complete configuration for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub title: Title,

    pub tooltip: Tooltip,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,

    /// Category axis; absent for the pie family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<CategoryAxis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<ValueAxis>,

    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

/// How the tooltip is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    /// Per-datum, used by the pie family
    Item,
    /// Whole-category, used by the cartesian charts
    Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Cross,
    Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub pointer_type: PointerType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: TooltipTrigger,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
}

impl Tooltip {
    pub fn item() -> Self {
        Self {
            trigger: TooltipTrigger::Item,
            axis_pointer: None,
        }
    }

    pub fn axis(pointer_type: PointerType) -> Self {
        Self {
            trigger: TooltipTrigger::Axis,
            axis_pointer: Some(AxisPointer { pointer_type }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLabel {
    pub rotate: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub axis_type: AxisKind,

    pub data: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub axis_type: AxisKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Pie radius: full disc or ring (doughnut)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PieRadius {
    Full(String),
    Ring([String; 2]),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaStyle {
    pub opacity: f64,
}

/// One series of a chart, tagged by family
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Bar {
        name: String,
        data: Vec<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Line {
        name: String,
        data: Vec<f64>,
        smooth: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        area_style: Option<AreaStyle>,
    },
    Scatter {
        name: String,
        data: Vec<f64>,
    },
    Pie {
        name: String,
        radius: PieRadius,
        data: Vec<PieSlice>,
    },
}
