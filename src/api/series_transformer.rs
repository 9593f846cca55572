use serde_json::{Map, Value, json};
use tracing::trace;

use crate::core::{
    ChartData, ColorResolver, Dataset, normalize_scatter_point, scatter_symbol_size,
};

/// Stack group shared by every series of a stacked chart.
pub const STACK_GROUP: &str = "total";

/// Series family produced by the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Line,
    Area,
    Bar,
    Scatter,
}

impl SeriesKind {
    /// Renderer series `type`. Areas are filled line series.
    #[must_use]
    pub const fn renderer_type(self) -> &'static str {
        match self {
            Self::Line | Self::Area => "line",
            Self::Bar => "bar",
            Self::Scatter => "scatter",
        }
    }
}

/// Area fill under a line series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaFill {
    pub opacity: f64,
    /// Fades from the series color to transparent towards the axis.
    pub gradient: bool,
}

/// Chart-level series styling; datasets may override `smooth`, `fill` and
/// line width individually.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesExtras {
    pub smooth: bool,
    pub show_symbols: bool,
    pub symbol_size: f64,
    pub stacked: bool,
    pub area_fill: Option<AreaFill>,
    pub bar_max_width: f64,
    pub bar_border_radius: f64,
    pub horizontal: bool,
}

impl Default for SeriesExtras {
    fn default() -> Self {
        Self {
            smooth: false,
            show_symbols: true,
            symbol_size: 6.0,
            stacked: false,
            area_fill: None,
            bar_max_width: 40.0,
            bar_border_radius: 4.0,
            horizontal: false,
        }
    }
}

/// Maps every dataset to one series descriptor, in dataset order.
#[must_use]
pub fn transform_series(
    data: &ChartData,
    kind: SeriesKind,
    extras: &SeriesExtras,
    colors: &ColorResolver,
) -> Vec<Value> {
    trace!(
        datasets = data.datasets.len(),
        kind = kind.renderer_type(),
        stacked = extras.stacked,
        "transform series"
    );
    data.datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let color = colors.dataset_color(dataset, index);
            let mut series = Map::new();
            series.insert("name".to_owned(), json!(dataset.label));
            series.insert("type".to_owned(), json!(kind.renderer_type()));
            match kind {
                SeriesKind::Line | SeriesKind::Area => {
                    line_fields(&mut series, dataset, extras, &color);
                }
                SeriesKind::Bar => bar_fields(&mut series, dataset, extras, &color),
                SeriesKind::Scatter => scatter_fields(&mut series, dataset, extras, &color),
            }
            if extras.stacked && kind != SeriesKind::Scatter {
                series.insert("stack".to_owned(), json!(STACK_GROUP));
            }
            series.insert("emphasis".to_owned(), json!({ "focus": "series" }));
            Value::Object(series)
        })
        .collect()
}

fn numeric_data(dataset: &Dataset) -> Value {
    json!(dataset.numbers().unwrap_or_default())
}

fn line_fields(
    series: &mut Map<String, Value>,
    dataset: &Dataset,
    extras: &SeriesExtras,
    color: &str,
) {
    series.insert("data".to_owned(), numeric_data(dataset));
    series.insert(
        "smooth".to_owned(),
        json!(dataset.smooth.unwrap_or(extras.smooth)),
    );
    series.insert("showSymbol".to_owned(), json!(extras.show_symbols));
    series.insert("symbolSize".to_owned(), json!(extras.symbol_size));
    series.insert("itemStyle".to_owned(), json!({ "color": color }));
    series.insert(
        "lineStyle".to_owned(),
        json!({ "color": color, "width": dataset.border_width.unwrap_or(2.0) }),
    );

    let fill = match (dataset.fill, extras.area_fill) {
        (Some(false), _) => None,
        (Some(true), None) => Some(AreaFill {
            opacity: 0.2,
            gradient: false,
        }),
        (None, fill) | (Some(true), fill) => fill,
    };
    if let Some(fill) = fill {
        series.insert("areaStyle".to_owned(), area_style(fill, color));
    }
}

fn area_style(fill: AreaFill, color: &str) -> Value {
    if fill.gradient {
        json!({
            "opacity": fill.opacity,
            "color": {
                "type": "linear",
                "x": 0, "y": 0, "x2": 0, "y2": 1,
                "colorStops": [
                    { "offset": 0, "color": color },
                    { "offset": 1, "color": "transparent" },
                ],
            },
        })
    } else {
        json!({ "opacity": fill.opacity, "color": color })
    }
}

fn bar_fields(
    series: &mut Map<String, Value>,
    dataset: &Dataset,
    extras: &SeriesExtras,
    color: &str,
) {
    let r = extras.bar_border_radius;
    let radius = if extras.horizontal {
        [0.0, r, r, 0.0]
    } else {
        [r, r, 0.0, 0.0]
    };
    series.insert("data".to_owned(), numeric_data(dataset));
    series.insert("barMaxWidth".to_owned(), json!(extras.bar_max_width));
    series.insert(
        "itemStyle".to_owned(),
        json!({ "color": color, "borderRadius": radius }),
    );
}

fn scatter_fields(
    series: &mut Map<String, Value>,
    dataset: &Dataset,
    extras: &SeriesExtras,
    color: &str,
) {
    let points: Vec<Value> = dataset
        .data
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let point = normalize_scatter_point(index, entry);
            if point.len() > 2 {
                json!({
                    "value": point.as_slice(),
                    "symbolSize": scatter_symbol_size(&point, extras.symbol_size),
                })
            } else {
                json!(point.as_slice())
            }
        })
        .collect();
    series.insert("data".to_owned(), Value::Array(points));
    series.insert("symbolSize".to_owned(), json!(extras.symbol_size));
    series.insert("itemStyle".to_owned(), json!({ "color": color }));
}
