use ordered_float::OrderedFloat;
use serde_json::{Value, json};

use crate::core::ChartData;
use crate::error::ChartResult;

use super::composer::{Gate, base_option, finish, gate, resolve_colors};
use super::validation::validate_radar_data;
use super::{ComposedChart, RadarChartOptions, RadarIndicator, RadarShape, TooltipTrigger};

/// Global ceiling shared by every indicator: `max_value` when given, else the
/// largest value across all datasets.
#[must_use]
pub fn radar_ceiling(data: &ChartData, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or_else(|| {
        data.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().filter_map(|v| v.as_number()))
            .map(OrderedFloat)
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    })
}

/// Indicator list with every `max` resolved.
///
/// Without explicit indicators, one is synthesized per label. An explicit
/// indicator without `max` falls back to the shared ceiling.
#[must_use]
pub fn radar_indicators(data: &ChartData, options: &RadarChartOptions) -> Vec<RadarIndicator> {
    let ceiling = radar_ceiling(data, options.max_value);
    match &options.indicators {
        Some(indicators) => indicators
            .iter()
            .map(|indicator| RadarIndicator {
                name: indicator.name.clone(),
                max: Some(indicator.max.unwrap_or(ceiling)),
            })
            .collect(),
        None => data
            .labels
            .iter()
            .map(|label| RadarIndicator::new(label.clone()).with_max(ceiling))
            .collect(),
    }
}

/// Composes a radar chart: one radar coordinate system and a single radar
/// series holding one entry per dataset. No grid or cartesian axes.
pub fn compose_radar_chart(
    data: Option<&ChartData>,
    options: &RadarChartOptions,
) -> ChartResult<ComposedChart> {
    let data = match gate("radar", options, data) {
        Gate::Done(state) => return Ok(state),
        Gate::Proceed(data) => data,
    };
    validate_radar_data(data, options)?;

    let tokens = options.theme.tokens();
    let colors = resolve_colors(options);
    let mut tree = base_option(options, &colors, TooltipTrigger::Item, &data.series_names());

    let indicators = radar_indicators(data, options);
    let shape = match options.shape {
        RadarShape::Polygon => "polygon",
        RadarShape::Circle => "circle",
    };
    tree.set(
        "radar",
        json!({
            "indicator": indicators,
            "shape": shape,
            "axisName": { "color": tokens.muted_text },
            "axisLine": { "lineStyle": { "color": tokens.axis_line } },
            "splitLine": { "lineStyle": { "color": tokens.split_line } },
            "splitArea": { "show": false },
        }),
    );

    let entries: Vec<Value> = data
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let color = colors.dataset_color(dataset, index);
            let mut entry = json!({
                "name": dataset.label,
                "value": dataset.numbers().unwrap_or_default(),
                "itemStyle": { "color": color },
                "lineStyle": { "color": color, "width": dataset.border_width.unwrap_or(2.0) },
            });
            if dataset.fill.unwrap_or(options.fill) {
                entry["areaStyle"] = json!({ "color": color, "opacity": options.fill_opacity });
            }
            entry
        })
        .collect();

    tree.set("series", json!([{ "type": "radar", "data": entries }]));
    Ok(finish("radar", tree, options))
}
