use chart_compose::core::{
    ColorResolver, DEFAULT_PALETTE, Dimension, Theme, resolve_dimensions,
};

#[test]
fn numeric_width_and_default_height() {
    let dims = resolve_dimensions(Some(&Dimension::Px(420.0)), None).expect("resolve");
    assert_eq!(dims.width, "420px");
    assert_eq!(dims.height, "300px");
}

#[test]
fn default_width_and_numeric_height() {
    let dims = resolve_dimensions(None, Some(250.0)).expect("resolve");
    assert_eq!(dims.width, "100%");
    assert_eq!(dims.height, "250px");
}

#[test]
fn string_width_passes_through_unchanged() {
    let dims = resolve_dimensions(Some(&Dimension::from("calc(100% - 2rem)")), None)
        .expect("resolve");
    assert_eq!(dims.width, "calc(100% - 2rem)");
}

#[test]
fn negative_and_zero_sizes_are_not_clamped() {
    let dims = resolve_dimensions(Some(&Dimension::Px(-5.0)), Some(0.0)).expect("resolve");
    assert_eq!(dims.width, "-5px");
    assert_eq!(dims.height, "0px");
}

#[test]
fn palette_cycles_past_its_length() {
    let resolver = ColorResolver::resolve(None);
    let len = resolver.len();
    for index in 0..(len * 3) {
        assert_eq!(resolver.color_at(index), DEFAULT_PALETTE[index % len]);
    }
}

#[test]
fn explicit_palette_replaces_default() {
    let explicit = vec!["#111".to_owned(), "#222".to_owned()];
    let resolver = ColorResolver::resolve(Some(explicit.as_slice()));
    assert_eq!(resolver.palette(), explicit);
    assert_eq!(resolver.color_at(5), "#222");
}

#[test]
fn themes_select_distinct_structural_tables() {
    let light = Theme::Light.tokens();
    let dark = Theme::Dark.tokens();
    assert_ne!(light.split_line, dark.split_line);
    assert_ne!(light.tooltip_background, dark.tooltip_background);
}
