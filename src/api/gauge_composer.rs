use serde_json::{Value, json};
use smallvec::SmallVec;

use crate::core::ColorSpec;
use crate::error::ChartResult;
use crate::render::OptionTree;

use super::composer::{finish, resolve_colors};
use super::validation::validate_gauge_options;
use super::{ComposedChart, GaugeChartOptions, GaugeZone};

/// `(fraction, color)`: the color applies from the previous stop's fraction
/// up to this one.
pub type ColorStop = (f64, String);
pub type ColorStops = SmallVec<[ColorStop; 4]>;

/// Converts zones into cumulative arc color stops `(to - min) / (max - min)`.
///
/// Without zones the arc takes `color`: one color spans the whole arc, a list
/// is spread evenly.
#[must_use]
pub fn gauge_color_stops(
    min: f64,
    max: f64,
    zones: Option<&[GaugeZone]>,
    color: &ColorSpec,
) -> ColorStops {
    if let Some(zones) = zones {
        let span = max - min;
        return zones
            .iter()
            .map(|zone| ((zone.to - min) / span, zone.color.clone()))
            .collect();
    }

    match color {
        ColorSpec::Single(color) => SmallVec::from_elem((1.0, color.clone()), 1),
        ColorSpec::List(colors) => {
            let count = colors.len() as f64;
            colors
                .iter()
                .enumerate()
                .map(|(index, color)| ((index + 1) as f64 / count, color.clone()))
                .collect()
        }
    }
}

/// Composes a gauge. There is no `ChartData`, so the only short-circuit
/// state is loading.
pub fn compose_gauge_chart(options: &GaugeChartOptions) -> ChartResult<ComposedChart> {
    if options.loading {
        return Ok(ComposedChart::Loading);
    }
    validate_gauge_options(options)?;

    let tokens = options.theme.tokens();
    let primary = match &options.color {
        Some(color) => color.clone(),
        None => ColorSpec::Single(resolve_colors(options).color_at(0).to_owned()),
    };
    let stops = gauge_color_stops(options.min, options.max, options.zones.as_deref(), &primary);
    let stop_values: Vec<Value> = stops
        .iter()
        .map(|(fraction, color)| json!([fraction, color]))
        .collect();
    let progress_color = primary.first().unwrap_or(tokens.text).to_owned();
    let unit = options.unit.as_deref().unwrap_or_default();

    let mut series = json!({
        "type": "gauge",
        "min": options.min,
        "max": options.max,
        "startAngle": options.start_angle,
        "endAngle": options.end_angle,
        "splitNumber": options.split_number,
        "axisLine": {
            "lineStyle": { "width": options.axis_width, "color": stop_values },
        },
        "progress": {
            "show": options.show_progress && options.zones.is_none(),
            "width": options.axis_width,
            "itemStyle": { "color": progress_color },
        },
        "pointer": { "itemStyle": { "color": "auto" } },
        "axisTick": { "lineStyle": { "color": tokens.gauge_track } },
        "splitLine": { "lineStyle": { "color": tokens.gauge_track } },
        "axisLabel": { "color": tokens.muted_text },
        "title": { "color": tokens.muted_text },
        "detail": {
            "valueAnimation": options.animation,
            "formatter": format!("{{value}}{unit}"),
            "color": tokens.text,
        },
        "data": [{ "value": options.value }],
    });
    if let Some(title) = &options.title {
        series["data"][0]["name"] = json!(title);
    }

    let mut tree = OptionTree::new();
    tree.set("series", json!([series]));
    Ok(finish("gauge", tree, options))
}
