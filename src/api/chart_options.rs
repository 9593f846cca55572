use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{ColorSpec, Dimension, Theme};

pub const DEFAULT_EMPTY_TEXT: &str = "No data available";

/// `false | true | config` input used by grid and tooltip.
///
/// `true` (and absence) selects the defaults; a config object overrides only
/// the fields it sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Enabled(bool),
    Custom(T),
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl<T: Clone + Default> Toggle<T> {
    /// `None` when switched off, the default config for `true`.
    #[must_use]
    pub fn resolve(&self) -> Option<T> {
        match self {
            Self::Enabled(false) => None,
            Self::Enabled(true) => Some(T::default()),
            Self::Custom(config) => Some(config.clone()),
        }
    }
}

/// Legend anchor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Partial grid margins. Unset fields take the default margin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub left: Option<String>,
    pub right: Option<String>,
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub contain_label: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPointerKind {
    Cross,
    Line,
    Shadow,
    None,
}

/// Partial tooltip settings. Unset fields take the chart's default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    pub trigger: Option<TooltipTrigger>,
    pub axis_pointer: Option<AxisPointerKind>,
    pub formatter: Option<String>,
}

/// Options shared by every chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub height: Option<f64>,
    pub width: Option<Dimension>,
    pub theme: Theme,
    pub legend: bool,
    pub legend_position: LegendPosition,
    pub grid: Toggle<GridConfig>,
    pub tooltip: Toggle<TooltipConfig>,
    pub animation: bool,
    pub loading: bool,
    pub empty_text: String,
    /// Explicit series palette; the default palette is used when absent or empty.
    pub colors: Option<Vec<String>>,
    /// Raw option object spread over the computed tree last.
    pub options: Option<Map<String, Value>>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: None,
            width: None,
            theme: Theme::default(),
            legend: true,
            legend_position: LegendPosition::default(),
            grid: Toggle::default(),
            tooltip: Toggle::default(),
            animation: true,
            loading: false,
            empty_text: DEFAULT_EMPTY_TEXT.to_owned(),
            colors: None,
            options: None,
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_legend(mut self, enabled: bool) -> Self {
        self.legend = enabled;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Toggle<GridConfig>) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Toggle<TooltipConfig>) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_raw_options(mut self, options: Map<String, Value>) -> Self {
        self.options = Some(options);
        self
    }
}

/// Implements `Deref` to the shared options and a `with_common` setter.
macro_rules! common_options {
    ($ty:ty) => {
        impl $ty {
            #[must_use]
            pub fn with_common(mut self, common: ChartOptions) -> Self {
                self.common = common;
                self
            }
        }

        impl std::ops::Deref for $ty {
            type Target = ChartOptions;

            fn deref(&self) -> &ChartOptions {
                &self.common
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub smooth: bool,
    pub show_symbols: bool,
    pub symbol_size: f64,
    pub stacked: bool,
    /// Fills every series down to the axis; `dataset.fill` overrides per series.
    pub area: bool,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            smooth: false,
            show_symbols: true,
            symbol_size: 6.0,
            stacked: false,
            area: false,
        }
    }
}

common_options!(LineChartOptions);

impl LineChartOptions {
    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_symbols(mut self, show: bool, size: f64) -> Self {
        self.show_symbols = show;
        self.symbol_size = size;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub smooth: bool,
    pub stacked: bool,
    pub opacity: f64,
    pub gradient: bool,
    pub show_symbols: bool,
}

impl Default for AreaChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            smooth: true,
            stacked: false,
            opacity: 0.35,
            gradient: true,
            show_symbols: false,
        }
    }
}

common_options!(AreaChartOptions);

impl AreaChartOptions {
    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, opacity: f64, gradient: bool) -> Self {
        self.opacity = opacity;
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub horizontal: bool,
    pub stacked: bool,
    pub bar_max_width: f64,
    pub border_radius: f64,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            horizontal: false,
            stacked: false,
            bar_max_width: 40.0,
            border_radius: 4.0,
        }
    }
}

common_options!(BarChartOptions);

impl BarChartOptions {
    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_bar_style(mut self, max_width: f64, border_radius: f64) -> Self {
        self.bar_max_width = max_width;
        self.border_radius = border_radius;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DonutChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub inner_radius: String,
    pub outer_radius: String,
    pub show_labels: bool,
    pub show_percentage: bool,
}

impl Default for DonutChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            inner_radius: "50%".to_owned(),
            outer_radius: "75%".to_owned(),
            show_labels: true,
            show_percentage: true,
        }
    }
}

common_options!(DonutChartOptions);

impl DonutChartOptions {
    /// Full pie: no inner hole.
    #[must_use]
    pub fn pie() -> Self {
        Self {
            inner_radius: "0%".to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_radius(mut self, inner: impl Into<String>, outer: impl Into<String>) -> Self {
        self.inner_radius = inner.into();
        self.outer_radius = outer.into();
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool, show_percentage: bool) -> Self {
        self.show_labels = show_labels;
        self.show_percentage = show_percentage;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarShape {
    #[default]
    Polygon,
    Circle,
}

/// Explicit radar axis. `max` falls back to the chart-level ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarIndicator {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RadarIndicator {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max: None,
        }
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub max_value: Option<f64>,
    pub indicators: Option<Vec<RadarIndicator>>,
    pub shape: RadarShape,
    pub fill: bool,
    pub fill_opacity: f64,
}

impl Default for RadarChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            max_value: None,
            indicators: None,
            shape: RadarShape::default(),
            fill: true,
            fill_opacity: 0.2,
        }
    }
}

common_options!(RadarChartOptions);

impl RadarChartOptions {
    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_indicators(mut self, indicators: Vec<RadarIndicator>) -> Self {
        self.indicators = Some(indicators);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: RadarShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: bool, opacity: f64) -> Self {
        self.fill = fill;
        self.fill_opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub symbol_size: f64,
    pub x_axis_name: Option<String>,
    pub y_axis_name: Option<String>,
}

impl Default for ScatterChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            symbol_size: 10.0,
            x_axis_name: None,
            y_axis_name: None,
        }
    }
}

common_options!(ScatterChartOptions);

impl ScatterChartOptions {
    #[must_use]
    pub fn with_symbol_size(mut self, size: f64) -> Self {
        self.symbol_size = size;
        self
    }

    #[must_use]
    pub fn with_axis_names(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_axis_name = Some(x.into());
        self.y_axis_name = Some(y.into());
        self
    }
}

/// Colored value sub-range of a gauge arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeZone {
    pub from: f64,
    pub to: f64,
    pub color: String,
}

impl GaugeZone {
    #[must_use]
    pub fn new(from: f64, to: f64, color: impl Into<String>) -> Self {
        Self {
            from,
            to,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeChartOptions {
    #[serde(flatten)]
    pub common: ChartOptions,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub zones: Option<Vec<GaugeZone>>,
    /// Arc color when no zones are given; a list is spread evenly along the arc.
    pub color: Option<ColorSpec>,
    pub title: Option<String>,
    pub unit: Option<String>,
    pub split_number: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Progress arc up to `value`; only drawn when no zones are given.
    pub show_progress: bool,
    pub axis_width: f64,
}

impl Default for GaugeChartOptions {
    fn default() -> Self {
        Self {
            common: ChartOptions::default(),
            value: 0.0,
            min: 0.0,
            max: 100.0,
            zones: None,
            color: None,
            title: None,
            unit: None,
            split_number: 10,
            start_angle: 225.0,
            end_angle: -45.0,
            show_progress: true,
            axis_width: 18.0,
        }
    }
}

common_options!(GaugeChartOptions);

impl GaugeChartOptions {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_zones(mut self, zones: Vec<GaugeZone>) -> Self {
        self.zones = Some(zones);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorSpec) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartOptions, GridConfig, LineChartOptions, Toggle, TooltipConfig};

    #[test]
    fn toggle_accepts_bool_or_object() {
        let off: Toggle<GridConfig> = serde_json::from_str("false").expect("bool");
        assert_eq!(off.resolve(), None);

        let custom: Toggle<GridConfig> =
            serde_json::from_str(r#"{"left": "10%"}"#).expect("object");
        let resolved = custom.resolve().expect("enabled");
        assert_eq!(resolved.left.as_deref(), Some("10%"));
        assert_eq!(resolved.top, None);
    }

    #[test]
    fn line_options_read_shared_and_specific_fields_from_one_object() {
        let options: LineChartOptions = serde_json::from_str(
            r#"{"smooth": true, "theme": "dark", "legendPosition": "left", "tooltip": false}"#,
        )
        .expect("parse line options");
        assert!(options.smooth);
        assert!(options.show_symbols);
        assert_eq!(options.common.theme, crate::core::Theme::Dark);
        assert_eq!(options.tooltip, Toggle::<TooltipConfig>::Enabled(false));
        assert!(options.legend);
    }

    #[test]
    fn default_options_enable_legend_and_animation() {
        let options = ChartOptions::default();
        assert!(options.legend && options.animation && !options.loading);
        assert_eq!(options.empty_text, super::DEFAULT_EMPTY_TEXT);
    }
}
