use crate::core::ChartData;
use crate::error::ChartResult;

use super::composer::{Gate, cartesian_option, finish, gate};
use super::validation::validate_category_data;
use super::{AreaFill, ComposedChart, LineChartOptions, SeriesExtras, SeriesKind};

const LINE_AREA_OPACITY: f64 = 0.2;

/// Composes a line chart option tree.
pub fn compose_line_chart(
    data: Option<&ChartData>,
    options: &LineChartOptions,
) -> ChartResult<ComposedChart> {
    let data = match gate("line", options, data) {
        Gate::Done(state) => return Ok(state),
        Gate::Proceed(data) => data,
    };
    validate_category_data("line", data)?;

    let extras = SeriesExtras {
        smooth: options.smooth,
        show_symbols: options.show_symbols,
        symbol_size: options.symbol_size,
        stacked: options.stacked,
        area_fill: options.area.then_some(AreaFill {
            opacity: LINE_AREA_OPACITY,
            gradient: false,
        }),
        ..SeriesExtras::default()
    };
    let tree = cartesian_option(data, options, SeriesKind::Line, &extras, true);
    Ok(finish("line", tree, options))
}
