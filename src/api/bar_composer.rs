use crate::core::ChartData;
use crate::error::ChartResult;

use super::composer::{Gate, cartesian_option, finish, gate};
use super::validation::validate_category_data;
use super::{BarChartOptions, ComposedChart, SeriesExtras, SeriesKind};

/// Composes a bar chart. Horizontal bars put the value axis on `xAxis` and
/// the category axis on `yAxis`.
pub fn compose_bar_chart(
    data: Option<&ChartData>,
    options: &BarChartOptions,
) -> ChartResult<ComposedChart> {
    let data = match gate("bar", options, data) {
        Gate::Done(state) => return Ok(state),
        Gate::Proceed(data) => data,
    };
    validate_category_data("bar", data)?;

    let extras = SeriesExtras {
        stacked: options.stacked,
        bar_max_width: options.bar_max_width,
        bar_border_radius: options.border_radius,
        horizontal: options.horizontal,
        ..SeriesExtras::default()
    };
    let tree = cartesian_option(data, options, SeriesKind::Bar, &extras, true);
    Ok(finish("bar", tree, options))
}
