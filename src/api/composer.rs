use serde_json::json;
use tracing::debug;

use crate::core::{ChartData, ColorResolver};
use crate::render::OptionTree;

use super::{
    ChartOptions, SeriesExtras, SeriesKind, TooltipTrigger, build_category_axis, build_grid,
    build_legend, build_tooltip, build_value_axis, place_axes, transform_series,
};

/// Result of one compose call.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposedChart {
    /// `loading` was set; no option tree is produced.
    Loading,
    /// No datasets; carries the text the host should show instead.
    Empty { message: String },
    Ready(OptionTree),
}

impl ComposedChart {
    #[must_use]
    pub fn option_tree(&self) -> Option<&OptionTree> {
        match self {
            Self::Ready(tree) => Some(tree),
            Self::Loading | Self::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn into_option_tree(self) -> Option<OptionTree> {
        match self {
            Self::Ready(tree) => Some(tree),
            Self::Loading | Self::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Outcome of the loading/empty check that precedes every data-backed compose.
pub(super) enum Gate<'a> {
    Done(ComposedChart),
    Proceed(&'a ChartData),
}

/// Loading wins over everything; missing or dataset-less data is empty.
pub(super) fn gate<'a>(
    chart: &'static str,
    common: &ChartOptions,
    data: Option<&'a ChartData>,
) -> Gate<'a> {
    if common.loading {
        debug!(chart, "chart is loading; skipping compose");
        return Gate::Done(ComposedChart::Loading);
    }
    match data {
        Some(data) if !data.datasets.is_empty() => Gate::Proceed(data),
        _ => {
            debug!(chart, "chart has no datasets");
            Gate::Done(ComposedChart::Empty {
                message: common.empty_text.clone(),
            })
        }
    }
}

#[must_use]
pub(super) fn resolve_colors(common: &ChartOptions) -> ColorResolver {
    ColorResolver::resolve(common.colors.as_deref())
}

/// Base option: palette, tooltip and legend, in that order.
#[must_use]
pub(super) fn base_option(
    common: &ChartOptions,
    colors: &ColorResolver,
    default_trigger: TooltipTrigger,
    legend_names: &[String],
) -> OptionTree {
    let tokens = common.theme.tokens();
    let mut tree = OptionTree::new();
    tree.set("color", json!(colors.palette()));
    tree.set_opt(
        "tooltip",
        build_tooltip(&common.tooltip, default_trigger, tokens),
    );
    tree.set_opt(
        "legend",
        build_legend(common.legend, common.legend_position, legend_names, tokens),
    );
    tree
}

/// Line, area and bar share one layout: base option, grid, category and value
/// axes, then series. Horizontal layouts swap the axes.
#[must_use]
pub(super) fn cartesian_option(
    data: &ChartData,
    common: &ChartOptions,
    kind: SeriesKind,
    extras: &SeriesExtras,
    boundary_gap: bool,
) -> OptionTree {
    let tokens = common.theme.tokens();
    let colors = resolve_colors(common);
    let mut tree = base_option(common, &colors, TooltipTrigger::Axis, &data.series_names());
    tree.set("grid", build_grid(&common.grid));

    let category = build_category_axis(&data.labels, boundary_gap, tokens);
    let value = build_value_axis(tokens);
    let (x_axis, y_axis) = place_axes(category, value, extras.horizontal);
    tree.set("xAxis", x_axis);
    tree.set("yAxis", y_axis);
    tree.set("series", json!(transform_series(data, kind, extras, &colors)));
    tree
}

/// Applies the animation flag and the caller's raw overrides, last.
#[must_use]
pub(super) fn finish(
    chart: &'static str,
    mut tree: OptionTree,
    common: &ChartOptions,
) -> ComposedChart {
    tree.set("animation", json!(common.animation));
    if let Some(overrides) = &common.options {
        tree.apply_overrides(overrides);
    }
    debug!(
        chart,
        series = tree.series().len(),
        keys = tree.len(),
        overrides = common.options.as_ref().map_or(0, |o| o.len()),
        "composed chart option"
    );
    ComposedChart::Ready(tree)
}
