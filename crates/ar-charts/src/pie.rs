//! Pie and doughnut chart builder

use ar_core::ReportResult;

use crate::options::{ChartOption, Legend, PieRadius, PieSlice, Series, Title, Tooltip};

pub(crate) fn build(
    result: &ReportResult,
    x_field: &str,
    y_field: Option<&str>,
    title: &str,
    doughnut: bool,
) -> ChartOption {
    let (categories, values) = crate::series_data(result, x_field, y_field);

    let slices = categories
        .iter()
        .zip(&values)
        .map(|(name, value)| PieSlice {
            name: name.clone(),
            value: *value,
        })
        .collect();

    let radius = if doughnut {
        PieRadius::Ring(["40%".to_string(), "70%".to_string()])
    } else {
        PieRadius::Full("70%".to_string())
    };

    ChartOption {
        title: Title {
            text: title.to_string(),
        },
        tooltip: Tooltip::item(),
        legend: Some(Legend { data: categories }),
        x_axis: None,
        y_axis: None,
        series: vec![Series::Pie {
            name: title.to_string(),
            radius,
            data: slices,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TooltipTrigger;
    use crate::testing::result_of;
    use serde_json::json;

    #[test]
    fn test_pie_slice_per_row_and_value_sum() {
        let result = result_of(&[
            (json!("open"), json!(3)),
            (json!("closed"), json!("4.5")),
            (json!("blocked"), json!("n/a")),
        ]);

        let option = build(&result, "category", Some("amount"), "Status", false);

        assert_eq!(option.tooltip.trigger, TooltipTrigger::Item);
        assert!(option.x_axis.is_none());
        match &option.series[0] {
            Series::Pie { data, radius, .. } => {
                assert_eq!(data.len(), result.data.len());
                let total: f64 = data.iter().map(|s| s.value).sum();
                assert_eq!(total, 7.5);
                assert_eq!(radius, &PieRadius::Full("70%".to_string()));
            }
            other => panic!("unexpected series {other:?}"),
        }
    }

    #[test]
    fn test_doughnut_has_inner_radius() {
        let result = result_of(&[(json!("a"), json!(1))]);

        let option = build(&result, "category", Some("amount"), "Status", true);

        match &option.series[0] {
            Series::Pie { radius, .. } => {
                assert_eq!(
                    radius,
                    &PieRadius::Ring(["40%".to_string(), "70%".to_string()])
                );
            }
            other => panic!("unexpected series {other:?}"),
        }
    }
}
