use chart_compose::api::{
    AreaChartOptions, BarChartOptions, ChartOptions, LineChartOptions, Toggle, compose_area_chart,
    compose_bar_chart, compose_line_chart,
};
use chart_compose::core::{ChartData, Dataset, Theme};
use chart_compose::render::OptionTree;
use serde_json::{Map, Value, json};

fn sales() -> ChartData {
    ChartData::new(["Mon", "Tue", "Wed", "Thu"])
        .with_dataset(Dataset::new("Online", [120.0, 132.0, 101.0, 134.0]))
        .with_dataset(Dataset::new("Retail", [220.0, 182.0, 191.0, 234.0]))
}

fn ready(tree: chart_compose::ComposedChart) -> OptionTree {
    tree.into_option_tree().expect("chart should be ready")
}

#[test]
fn line_chart_has_category_layout_keys_in_build_order() {
    let tree = ready(compose_line_chart(Some(&sales()), &LineChartOptions::default()).expect("compose"));
    let keys: Vec<&str> = tree.keys().collect();
    assert_eq!(
        keys,
        vec!["color", "tooltip", "legend", "grid", "xAxis", "yAxis", "series", "animation"]
    );
    assert_eq!(tree.get("xAxis").expect("xAxis")["type"], "category");
    assert_eq!(tree.get("xAxis").expect("xAxis")["boundaryGap"], true);
    assert_eq!(tree.get("yAxis").expect("yAxis")["type"], "value");
    assert_eq!(tree.series().len(), 2);
    assert_eq!(tree.get("legend").expect("legend")["data"], json!(["Online", "Retail"]));
}

#[test]
fn line_area_flag_fills_every_series() {
    let options = LineChartOptions::default().with_area(true).with_smooth(true);
    let tree = ready(compose_line_chart(Some(&sales()), &options).expect("compose"));
    for series in tree.series() {
        assert!(series.get("areaStyle").is_some());
        assert_eq!(series["smooth"], true);
    }
}

#[test]
fn area_chart_removes_boundary_gap_and_fills() {
    let tree = ready(compose_area_chart(Some(&sales()), &AreaChartOptions::default()).expect("compose"));
    assert_eq!(tree.get("xAxis").expect("xAxis")["boundaryGap"], false);
    for series in tree.series() {
        assert_eq!(series["type"], "line");
        assert!(series.get("areaStyle").is_some());
    }
}

#[test]
fn stacked_area_shares_stack_group() {
    let options = AreaChartOptions::default().with_stacked(true);
    let tree = ready(compose_area_chart(Some(&sales()), &options).expect("compose"));
    assert!(tree.series().iter().all(|s| s["stack"] == "total"));
}

#[test]
fn horizontal_bar_swaps_axes() {
    let vertical =
        ready(compose_bar_chart(Some(&sales()), &BarChartOptions::default()).expect("compose"));
    let horizontal = ready(
        compose_bar_chart(Some(&sales()), &BarChartOptions::default().with_horizontal(true))
            .expect("compose"),
    );

    assert_eq!(horizontal.get("xAxis"), vertical.get("yAxis"));
    assert_eq!(horizontal.get("yAxis"), vertical.get("xAxis"));
    assert_eq!(horizontal.get("xAxis").expect("xAxis")["type"], "value");
    assert_eq!(horizontal.get("yAxis").expect("yAxis")["type"], "category");
}

#[test]
fn bar_series_carry_width_and_radius() {
    let options = BarChartOptions::default().with_bar_style(24.0, 2.0);
    let tree = ready(compose_bar_chart(Some(&sales()), &options).expect("compose"));
    let series = &tree.series()[0];
    assert_eq!(series["type"], "bar");
    assert_eq!(series["barMaxWidth"], 24.0);
    assert_eq!(series["itemStyle"]["borderRadius"], json!([2.0, 2.0, 0.0, 0.0]));
}

#[test]
fn disabled_legend_and_tooltip_are_omitted() {
    let common = ChartOptions::default()
        .with_legend(false)
        .with_tooltip(Toggle::Enabled(false));
    let options = LineChartOptions::default().with_common(common);
    let tree = ready(compose_line_chart(Some(&sales()), &options).expect("compose"));
    assert!(!tree.contains_key("legend"));
    assert!(!tree.contains_key("tooltip"));
    assert!(tree.contains_key("grid"));
}

#[test]
fn dark_theme_changes_structural_colors_only() {
    let light = ready(compose_bar_chart(Some(&sales()), &BarChartOptions::default()).expect("compose"));
    let dark_options =
        BarChartOptions::default().with_common(ChartOptions::default().with_theme(Theme::Dark));
    let dark = ready(compose_bar_chart(Some(&sales()), &dark_options).expect("compose"));

    assert_eq!(light.get("color"), dark.get("color"));
    assert_eq!(light.series(), dark.series());
    assert_ne!(light.get("yAxis"), dark.get("yAxis"));
    assert_ne!(light.get("tooltip"), dark.get("tooltip"));
}

#[test]
fn raw_options_override_any_computed_key() {
    let mut raw = Map::new();
    raw.insert("yAxis".to_owned(), json!({ "type": "log" }));
    raw.insert("title".to_owned(), json!({ "text": "Weekly sales" }));
    raw.insert("animation".to_owned(), Value::Bool(false));
    let options =
        LineChartOptions::default().with_common(ChartOptions::default().with_raw_options(raw));

    let tree = ready(compose_line_chart(Some(&sales()), &options).expect("compose"));
    assert_eq!(tree.get("yAxis"), Some(&json!({ "type": "log" })));
    assert_eq!(tree.get("title"), Some(&json!({ "text": "Weekly sales" })));
    assert_eq!(tree.get("animation"), Some(&Value::Bool(false)));
    assert_eq!(tree.series().len(), 2);
}

#[test]
fn explicit_palette_is_emitted_and_used() {
    let options = BarChartOptions::default().with_common(
        ChartOptions::default().with_colors(vec!["#aa0000".to_owned()]),
    );
    let tree = ready(compose_bar_chart(Some(&sales()), &options).expect("compose"));
    assert_eq!(tree.get("color"), Some(&json!(["#aa0000"])));
    assert!(tree.series().iter().all(|s| s["itemStyle"]["color"] == "#aa0000"));
}
