use crate::core::ChartData;
use crate::error::ChartResult;

use super::composer::{Gate, cartesian_option, finish, gate};
use super::validation::validate_category_data;
use super::{AreaChartOptions, AreaFill, ComposedChart, SeriesExtras, SeriesKind};

/// Composes an area chart: filled line series with the category axis
/// flush against the plot edges.
pub fn compose_area_chart(
    data: Option<&ChartData>,
    options: &AreaChartOptions,
) -> ChartResult<ComposedChart> {
    let data = match gate("area", options, data) {
        Gate::Done(state) => return Ok(state),
        Gate::Proceed(data) => data,
    };
    validate_category_data("area", data)?;

    let extras = SeriesExtras {
        smooth: options.smooth,
        show_symbols: options.show_symbols,
        stacked: options.stacked,
        area_fill: Some(AreaFill {
            opacity: options.opacity,
            gradient: options.gradient,
        }),
        ..SeriesExtras::default()
    };
    let tree = cartesian_option(data, options, SeriesKind::Area, &extras, false);
    Ok(finish("area", tree, options))
}
