//! Scatter chart builder
//!
//! Values are positioned against the category axis, the same frame as a bar
//! chart; there is no true 2D (x, y) scatter.

use ar_core::ReportResult;

use crate::options::{
    AxisKind, CategoryAxis, ChartOption, PointerType, Series, Title, Tooltip, ValueAxis,
};

pub(crate) fn build(
    result: &ReportResult,
    x_field: &str,
    y_field: Option<&str>,
    y_label: Option<&str>,
    title: &str,
) -> ChartOption {
    let (categories, values) = crate::series_data(result, x_field, y_field);

    ChartOption {
        title: Title {
            text: title.to_string(),
        },
        tooltip: Tooltip::axis(PointerType::Shadow),
        legend: None,
        x_axis: Some(CategoryAxis {
            axis_type: AxisKind::Category,
            data: categories,
            axis_label: None,
        }),
        y_axis: Some(ValueAxis {
            axis_type: AxisKind::Value,
            name: y_label.map(str::to_string),
        }),
        series: vec![Series::Scatter {
            name: crate::series_name(y_label, title),
            data: values,
        }],
    }
}
