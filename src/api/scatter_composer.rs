use serde_json::json;

use crate::core::ChartData;
use crate::error::ChartResult;

use super::composer::{Gate, base_option, finish, gate, resolve_colors};
use super::validation::validate_scatter_data;
use super::{
    ComposedChart, ScatterChartOptions, SeriesExtras, SeriesKind, TooltipTrigger, build_grid,
    build_named_value_axis, transform_series,
};

/// Composes a scatter chart on two value axes.
///
/// `labels` are not used; each dataset entry is normalized to `[x, y]` or
/// `[x, y, v]`, and weighted points get their own symbol size.
pub fn compose_scatter_chart(
    data: Option<&ChartData>,
    options: &ScatterChartOptions,
) -> ChartResult<ComposedChart> {
    let data = match gate("scatter", options, data) {
        Gate::Done(state) => return Ok(state),
        Gate::Proceed(data) => data,
    };
    validate_scatter_data(data)?;

    let tokens = options.theme.tokens();
    let colors = resolve_colors(options);
    let mut tree = base_option(options, &colors, TooltipTrigger::Item, &data.series_names());
    tree.set("grid", build_grid(&options.grid));
    tree.set(
        "xAxis",
        build_named_value_axis(options.x_axis_name.as_deref(), tokens),
    );
    tree.set(
        "yAxis",
        build_named_value_axis(options.y_axis_name.as_deref(), tokens),
    );

    let extras = SeriesExtras {
        symbol_size: options.symbol_size,
        ..SeriesExtras::default()
    };
    tree.set(
        "series",
        json!(transform_series(data, SeriesKind::Scatter, &extras, &colors)),
    );
    Ok(finish("scatter", tree, options))
}
