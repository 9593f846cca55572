mod area_composer;
mod axis_builder;
mod bar_composer;
mod chart_host;
mod chart_options;
mod chart_spec;
mod composer;
mod donut_composer;
mod gauge_composer;
mod grid_builder;
mod legend_builder;
mod line_composer;
mod radar_composer;
mod scatter_composer;
mod series_transformer;
mod tooltip_builder;
mod validation;

pub use area_composer::compose_area_chart;
pub use axis_builder::{
    build_category_axis, build_named_value_axis, build_value_axis, place_axes,
};
pub use bar_composer::compose_bar_chart;
pub use chart_host::ChartHost;
pub use chart_options::{
    AreaChartOptions, AxisPointerKind, BarChartOptions, ChartOptions, DEFAULT_EMPTY_TEXT,
    DonutChartOptions, GaugeChartOptions, GaugeZone, GridConfig, LegendPosition,
    LineChartOptions, RadarChartOptions, RadarIndicator, RadarShape, ScatterChartOptions, Toggle,
    TooltipConfig, TooltipTrigger,
};
pub use chart_spec::{ChartSpec, compose};
pub use composer::ComposedChart;
pub use donut_composer::{compose_donut_chart, donut_percentages};
pub use gauge_composer::{ColorStop, ColorStops, compose_gauge_chart, gauge_color_stops};
pub use grid_builder::{
    DEFAULT_GRID_BOTTOM, DEFAULT_GRID_LEFT, DEFAULT_GRID_RIGHT, DEFAULT_GRID_TOP, build_grid,
};
pub use legend_builder::build_legend;
pub use line_composer::compose_line_chart;
pub use radar_composer::{compose_radar_chart, radar_ceiling, radar_indicators};
pub use scatter_composer::compose_scatter_chart;
pub use series_transformer::{AreaFill, STACK_GROUP, SeriesExtras, SeriesKind, transform_series};
pub use tooltip_builder::build_tooltip;
