use serde::{Deserialize, Serialize};

use crate::core::ChartData;
use crate::error::{ChartError, ChartResult};

use super::{
    AreaChartOptions, BarChartOptions, ChartOptions, ComposedChart, DonutChartOptions,
    GaugeChartOptions, LineChartOptions, RadarChartOptions, ScatterChartOptions,
    compose_area_chart, compose_bar_chart, compose_donut_chart, compose_gauge_chart,
    compose_line_chart, compose_radar_chart, compose_scatter_chart,
};

/// One chart request covering every supported kind.
///
/// Serialized with a `kind` tag so hosts can ship the whole request as one
/// JSON document:
/// `{"kind": "bar", "data": {...}, "config": {"horizontal": true}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Line {
        #[serde(default)]
        data: Option<ChartData>,
        #[serde(default)]
        config: LineChartOptions,
    },
    Area {
        #[serde(default)]
        data: Option<ChartData>,
        #[serde(default)]
        config: AreaChartOptions,
    },
    Bar {
        #[serde(default)]
        data: Option<ChartData>,
        #[serde(default)]
        config: BarChartOptions,
    },
    Donut {
        #[serde(default)]
        data: Option<ChartData>,
        #[serde(default)]
        config: DonutChartOptions,
    },
    Radar {
        #[serde(default)]
        data: Option<ChartData>,
        #[serde(default)]
        config: RadarChartOptions,
    },
    Scatter {
        #[serde(default)]
        data: Option<ChartData>,
        #[serde(default)]
        config: ScatterChartOptions,
    },
    Gauge {
        #[serde(default)]
        config: GaugeChartOptions,
    },
}

impl ChartSpec {
    /// Options shared by every kind (dimensions, theme, loading, ...).
    #[must_use]
    pub fn common(&self) -> &ChartOptions {
        match self {
            Self::Line { config, .. } => &config.common,
            Self::Area { config, .. } => &config.common,
            Self::Bar { config, .. } => &config.common,
            Self::Donut { config, .. } => &config.common,
            Self::Radar { config, .. } => &config.common,
            Self::Scatter { config, .. } => &config.common,
            Self::Gauge { config } => &config.common,
        }
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Area { .. } => "area",
            Self::Bar { .. } => "bar",
            Self::Donut { .. } => "donut",
            Self::Radar { .. } => "radar",
            Self::Scatter { .. } => "scatter",
            Self::Gauge { .. } => "gauge",
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse chart spec: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize chart spec: {e}")))
    }
}

/// Dispatches to the composer for the spec's kind.
pub fn compose(spec: &ChartSpec) -> ChartResult<ComposedChart> {
    match spec {
        ChartSpec::Line { data, config } => compose_line_chart(data.as_ref(), config),
        ChartSpec::Area { data, config } => compose_area_chart(data.as_ref(), config),
        ChartSpec::Bar { data, config } => compose_bar_chart(data.as_ref(), config),
        ChartSpec::Donut { data, config } => compose_donut_chart(data.as_ref(), config),
        ChartSpec::Radar { data, config } => compose_radar_chart(data.as_ref(), config),
        ChartSpec::Scatter { data, config } => compose_scatter_chart(data.as_ref(), config),
        ChartSpec::Gauge { config } => compose_gauge_chart(config),
    }
}
