use chart_compose::api::{SeriesExtras, SeriesKind, STACK_GROUP, transform_series};
use chart_compose::core::{
    ChartData, ColorResolver, DEFAULT_PALETTE, DataValue, Dataset, normalize_scatter_point,
    scatter_symbol_size,
};
use serde_json::json;

fn quarterly() -> ChartData {
    ChartData::new(["Q1", "Q2", "Q3"])
        .with_dataset(Dataset::new("North", [10.0, 20.0, 30.0]))
        .with_dataset(Dataset::new("South", [5.0, 15.0, 25.0]).with_color("#123456"))
        .with_dataset(Dataset::new("West", [1.0, 2.0, 3.0]).with_smooth(true))
}

#[test]
fn one_series_per_dataset_in_order() {
    let series = transform_series(
        &quarterly(),
        SeriesKind::Line,
        &SeriesExtras::default(),
        &ColorResolver::default(),
    );
    let names: Vec<&str> = series.iter().filter_map(|s| s["name"].as_str()).collect();
    assert_eq!(names, vec!["North", "South", "West"]);
    assert_eq!(series[0]["type"], "line");
    assert_eq!(series[0]["data"], json!([10.0, 20.0, 30.0]));
}

#[test]
fn explicit_color_wins_and_others_cycle_by_index() {
    let series = transform_series(
        &quarterly(),
        SeriesKind::Bar,
        &SeriesExtras::default(),
        &ColorResolver::default(),
    );
    assert_eq!(series[0]["itemStyle"]["color"], DEFAULT_PALETTE[0]);
    assert_eq!(series[1]["itemStyle"]["color"], "#123456");
    assert_eq!(series[2]["itemStyle"]["color"], DEFAULT_PALETTE[2]);
}

#[test]
fn stacking_puts_every_series_in_one_group() {
    let extras = SeriesExtras {
        stacked: true,
        ..SeriesExtras::default()
    };
    let series = transform_series(&quarterly(), SeriesKind::Bar, &extras, &ColorResolver::default());
    assert!(series.iter().all(|s| s["stack"] == STACK_GROUP));

    let unstacked = transform_series(
        &quarterly(),
        SeriesKind::Bar,
        &SeriesExtras::default(),
        &ColorResolver::default(),
    );
    assert!(unstacked.iter().all(|s| s.get("stack").is_none()));
}

#[test]
fn dataset_smooth_overrides_chart_level_flag() {
    let series = transform_series(
        &quarterly(),
        SeriesKind::Line,
        &SeriesExtras::default(),
        &ColorResolver::default(),
    );
    assert_eq!(series[0]["smooth"], false);
    assert_eq!(series[2]["smooth"], true);
}

#[test]
fn area_series_render_as_filled_lines() {
    let extras = SeriesExtras {
        area_fill: Some(chart_compose::api::AreaFill {
            opacity: 0.35,
            gradient: true,
        }),
        ..SeriesExtras::default()
    };
    let series = transform_series(&quarterly(), SeriesKind::Area, &extras, &ColorResolver::default());
    assert_eq!(series[0]["type"], "line");
    assert_eq!(series[0]["areaStyle"]["opacity"], 0.35);
    assert_eq!(series[0]["areaStyle"]["color"]["type"], "linear");
}

#[test]
fn dataset_fill_false_removes_area_fill_on_area_series() {
    let data = ChartData::new(["Q1", "Q2"])
        .with_dataset(Dataset::new("filled", [1.0, 2.0]))
        .with_dataset(Dataset::new("outline", [3.0, 4.0]).with_fill(false));
    let extras = SeriesExtras {
        area_fill: Some(chart_compose::api::AreaFill {
            opacity: 0.35,
            gradient: true,
        }),
        ..SeriesExtras::default()
    };
    let series = transform_series(&data, SeriesKind::Area, &extras, &ColorResolver::default());
    assert!(series[0].get("areaStyle").is_some());
    assert!(series[1].get("areaStyle").is_none());
}

#[test]
fn scatter_points_normalize_by_shape() {
    assert_eq!(
        normalize_scatter_point(0, &DataValue::weighted_point(3.0, 7.0, 9.0)).as_slice(),
        &[3.0, 7.0, 9.0]
    );
    assert_eq!(
        normalize_scatter_point(0, &DataValue::from([3.0, 7.0])).as_slice(),
        &[3.0, 7.0]
    );
    assert_eq!(
        normalize_scatter_point(2, &DataValue::Number(4.0)).as_slice(),
        &[2.0, 4.0]
    );
}

#[test]
fn scatter_symbol_size_scales_with_weight() {
    assert_eq!(scatter_symbol_size(&[0.0, 0.0, 9.0], 10.0), 6.0);
    assert_eq!(scatter_symbol_size(&[0.0, 0.0], 10.0), 10.0);
}

#[test]
fn scatter_series_size_weighted_points_individually() {
    let data = ChartData::default().with_dataset(Dataset::from_values(
        "points",
        vec![
            DataValue::from([1.0, 2.0]),
            DataValue::weighted_point(3.0, 7.0, 25.0),
            DataValue::Number(8.0),
        ],
    ));
    let extras = SeriesExtras {
        symbol_size: 10.0,
        ..SeriesExtras::default()
    };
    let series = transform_series(&data, SeriesKind::Scatter, &extras, &ColorResolver::default());
    let points = &series[0]["data"];
    assert_eq!(points[0], json!([1.0, 2.0]));
    assert_eq!(points[1], json!({ "value": [3.0, 7.0, 25.0], "symbolSize": 10.0 }));
    assert_eq!(points[2], json!([2.0, 8.0]));
    assert_eq!(series[0]["symbolSize"], 10.0);
}
