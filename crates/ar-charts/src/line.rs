//! Line and area chart builder

use ar_core::ReportResult;

use crate::options::{
    AreaStyle, AxisKind, CategoryAxis, ChartOption, PointerType, Series, Title, Tooltip, ValueAxis,
};

pub(crate) fn build(
    result: &ReportResult,
    x_field: &str,
    y_field: Option<&str>,
    y_label: Option<&str>,
    title: &str,
    filled: bool,
) -> ChartOption {
    let (categories, values) = crate::series_data(result, x_field, y_field);

    let area_style = filled.then_some(AreaStyle { opacity: 0.5 });

    ChartOption {
        title: Title {
            text: title.to_string(),
        },
        tooltip: Tooltip::axis(PointerType::Cross),
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
        series: vec![Series::Line {
            name: crate::series_name(y_label, title),
            data: values,
            smooth: true,
            area_style,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PointerType, TooltipTrigger};
    use crate::testing::result_of;
    use serde_json::json;

    #[test]
    fn test_line_is_smooth_without_fill() {
        let result = result_of(&[(json!("jan"), json!(1)), (json!("feb"), json!(2))]);

        let option = build(&result, "category", Some("amount"), None, "Trend", false);

        assert_eq!(option.tooltip.trigger, TooltipTrigger::Axis);
        assert_eq!(
            option.tooltip.axis_pointer.unwrap().pointer_type,
            PointerType::Cross
        );
        match &option.series[0] {
            Series::Line {
                smooth, area_style, ..
            } => {
                assert!(*smooth);
                assert!(area_style.is_none());
            }
            other => panic!("unexpected series {other:?}"),
        }
    }

    #[test]
    fn test_area_fills_at_half_opacity() {
        let result = result_of(&[(json!("jan"), json!(1))]);

        let option = build(&result, "category", Some("amount"), None, "Trend", true);

        match &option.series[0] {
            Series::Line { area_style, .. } => {
                assert_eq!(area_style.unwrap().opacity, 0.5);
            }
            other => panic!("unexpected series {other:?}"),
        }
    }
}
