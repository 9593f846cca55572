use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Value, json};
use tracing::warn;

use crate::core::ChartData;
use crate::error::ChartResult;

use super::composer::{Gate, base_option, finish, gate, resolve_colors};
use super::validation::validate_donut_data;
use super::{ComposedChart, DonutChartOptions, TooltipTrigger};

/// Percentage share of every slice, rounded to one decimal.
///
/// A zero total yields `0.0` for every slice instead of `NaN`.
#[must_use]
pub fn donut_percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| round_one_decimal(value / total * 100.0))
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Composes a donut (or pie) chart from the first dataset only.
///
/// Slice names come from `labels`; slice colors from the dataset's
/// `backgroundColor` list, falling back to the palette by slice index.
pub fn compose_donut_chart(
    data: Option<&ChartData>,
    options: &DonutChartOptions,
) -> ChartResult<ComposedChart> {
    let data = match gate("donut", options, data) {
        Gate::Done(state) => return Ok(state),
        Gate::Proceed(data) => data,
    };
    validate_donut_data(data)?;

    let Some(dataset) = data.datasets.first() else {
        return Ok(ComposedChart::Empty {
            message: options.empty_text.clone(),
        });
    };
    let values = dataset.numbers().unwrap_or_default();
    if values.iter().sum::<f64>() == 0.0 {
        warn!(dataset = %dataset.label, "donut total is zero; percentages fall back to 0");
    }
    let percentages = donut_percentages(&values);

    let tokens = options.theme.tokens();
    let colors = resolve_colors(options);
    let mut tree = base_option(options, &colors, TooltipTrigger::Item, &data.labels);

    let slices: Vec<Value> = data
        .labels
        .iter()
        .zip(values.iter().zip(&percentages))
        .enumerate()
        .map(|(index, (name, (value, percent)))| {
            let color = dataset
                .background_color
                .as_ref()
                .and_then(|bg| bg.get(index))
                .unwrap_or_else(|| colors.color_at(index));
            let label = if options.show_percentage {
                format!("{name}: {percent:.1}%")
            } else {
                name.clone()
            };
            json!({
                "name": name,
                "value": value,
                "percent": percent,
                "itemStyle": { "color": color },
                "label": { "formatter": label },
                "tooltip": {
                    "formatter": format!("{}<br/>{name}: {value} ({percent:.1}%)", dataset.label),
                },
            })
        })
        .collect();

    tree.set(
        "series",
        json!([{
            "name": dataset.label,
            "type": "pie",
            "radius": [options.inner_radius, options.outer_radius],
            "center": ["50%", "50%"],
            "avoidLabelOverlap": true,
            "itemStyle": { "borderColor": tokens.tooltip_background, "borderWidth": 2 },
            "label": { "show": options.show_labels, "color": tokens.text },
            "labelLine": { "show": options.show_labels },
            "data": slices,
        }]),
    );
    Ok(finish("donut", tree, options))
}
