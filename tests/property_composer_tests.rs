use chart_compose::api::{
    BarChartOptions, LineChartOptions, SeriesExtras, SeriesKind, compose_bar_chart,
    compose_line_chart, donut_percentages, transform_series,
};
use chart_compose::core::{ChartData, ColorResolver, DEFAULT_PALETTE, Dataset};
use chart_compose::{ChartOptions, ComposedChart};
use proptest::prelude::*;

fn chart_data(label_count: usize, values: &[Vec<f64>]) -> ChartData {
    let labels: Vec<String> = (0..label_count).map(|i| format!("L{i}")).collect();
    values
        .iter()
        .enumerate()
        .fold(ChartData::new(labels), |data, (index, row)| {
            data.with_dataset(Dataset::new(format!("S{index}"), row.iter().copied()))
        })
}

fn datasets_strategy() -> impl Strategy<Value = (usize, Vec<Vec<f64>>)> {
    (1usize..8).prop_flat_map(|labels| {
        (
            Just(labels),
            prop::collection::vec(prop::collection::vec(-1_000.0f64..1_000.0, labels), 0..24),
        )
    })
}

proptest! {
    #[test]
    fn series_count_and_order_follow_datasets((labels, rows) in datasets_strategy()) {
        let data = chart_data(labels, &rows);
        let series = transform_series(
            &data,
            SeriesKind::Line,
            &SeriesExtras::default(),
            &ColorResolver::default(),
        );
        prop_assert_eq!(series.len(), rows.len());
        for (index, entry) in series.iter().enumerate() {
            let expected = format!("S{index}");
            prop_assert_eq!(entry["name"].as_str(), Some(expected.as_str()));
        }
    }

    #[test]
    fn default_colors_cycle_through_palette((labels, rows) in datasets_strategy()) {
        let data = chart_data(labels, &rows);
        let series = transform_series(
            &data,
            SeriesKind::Bar,
            &SeriesExtras::default(),
            &ColorResolver::default(),
        );
        for (index, entry) in series.iter().enumerate() {
            let expected = DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
            prop_assert_eq!(entry["itemStyle"]["color"].as_str(), Some(expected));
        }
    }

    #[test]
    fn compose_is_deterministic(
        (labels, rows) in datasets_strategy(),
        horizontal in any::<bool>(),
        stacked in any::<bool>()
    ) {
        let data = chart_data(labels, &rows);
        let options = BarChartOptions::default()
            .with_horizontal(horizontal)
            .with_stacked(stacked);
        let first = compose_bar_chart(Some(&data), &options).expect("first compose");
        let second = compose_bar_chart(Some(&data), &options).expect("second compose");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_datasets_are_empty_regardless_of_options(
        label_count in 0usize..10,
        smooth in any::<bool>(),
        legend in any::<bool>(),
        animation in any::<bool>()
    ) {
        let data = chart_data(label_count, &[]);
        let options = LineChartOptions::default()
            .with_smooth(smooth)
            .with_common(ChartOptions::default().with_legend(legend).with_animation(animation));
        let composed = compose_line_chart(Some(&data), &options).expect("compose");
        prop_assert!(composed.is_empty());
    }

    #[test]
    fn loading_always_short_circuits((labels, rows) in datasets_strategy()) {
        let data = chart_data(labels, &rows);
        let options = LineChartOptions::default()
            .with_common(ChartOptions::default().with_loading(true));
        prop_assert_eq!(
            compose_line_chart(Some(&data), &options).expect("compose"),
            ComposedChart::Loading
        );
    }

    #[test]
    fn donut_percentages_sum_to_about_hundred(
        values in prop::collection::vec(0.1f64..10_000.0, 1..12)
    ) {
        let percentages = donut_percentages(&values);
        prop_assert_eq!(percentages.len(), values.len());
        let sum: f64 = percentages.iter().sum();
        // One-decimal rounding drifts at most 0.05 per slice.
        prop_assert!((sum - 100.0).abs() <= 0.05 * values.len() as f64 + 1e-9);
    }
}
