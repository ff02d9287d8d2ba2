//! Bar chart builder

use ar_core::ReportResult;

use crate::options::{
    AxisKind, AxisLabel, CategoryAxis, ChartOption, PointerType, Series, Title, Tooltip, ValueAxis,
};

/// Categories rotate 45° past this many bars to stay readable
const ROTATE_THRESHOLD: usize = 10;

pub(crate) fn build(
    result: &ReportResult,
    x_field: &str,
    y_field: Option<&str>,
    y_label: Option<&str>,
    title: &str,
) -> ChartOption {
    let (categories, values) = crate::series_data(result, x_field, y_field);

    let axis_label = if categories.len() > ROTATE_THRESHOLD {
        Some(AxisLabel { rotate: 45 })
    } else {
        None
    };

    ChartOption {
        title: Title {
            text: title.to_string(),
        },
        tooltip: Tooltip::axis(PointerType::Shadow),
        legend: None,
        x_axis: Some(CategoryAxis {
            axis_type: AxisKind::Category,
            data: categories,
            axis_label,
        }),
        y_axis: Some(ValueAxis {
            axis_type: AxisKind::Value,
            name: y_label.map(str::to_string),
        }),
        series: vec![Series::Bar {
            name: crate::series_name(y_label, title),
            data: values,
        }],
    }
}
