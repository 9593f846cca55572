use serde_json::{Value, json};
use tracing::trace;

use crate::core::ThemeTokens;

/// Category axis over `labels`.
///
/// `boundary_gap` is `false` for area charts so the fill reaches both edges.
#[must_use]
pub fn build_category_axis(labels: &[String], boundary_gap: bool, tokens: &ThemeTokens) -> Value {
    trace!(labels = labels.len(), boundary_gap, "build category axis");
    json!({
        "type": "category",
        "data": labels,
        "boundaryGap": boundary_gap,
        "axisLine": { "lineStyle": { "color": tokens.axis_line } },
        "axisTick": { "show": false },
        "axisLabel": { "color": tokens.muted_text },
    })
}

/// Value axis with a dashed, theme-colored split line.
#[must_use]
pub fn build_value_axis(tokens: &ThemeTokens) -> Value {
    json!({
        "type": "value",
        "axisLine": { "show": false },
        "axisLabel": { "color": tokens.muted_text },
        "splitLine": {
            "lineStyle": { "color": tokens.split_line, "type": "dashed" },
        },
    })
}

/// Value axis carrying an axis title, used by scatter charts on both edges.
#[must_use]
pub fn build_named_value_axis(name: Option<&str>, tokens: &ThemeTokens) -> Value {
    let mut axis = build_value_axis(tokens);
    if let (Some(name), Some(fields)) = (name, axis.as_object_mut()) {
        fields.insert("name".to_owned(), json!(name));
        fields.insert(
            "nameTextStyle".to_owned(),
            json!({ "color": tokens.muted_text }),
        );
    }
    axis
}

/// `(xAxis, yAxis)` placement; horizontal bars swap the two.
#[must_use]
pub fn place_axes(category: Value, value: Value, horizontal: bool) -> (Value, Value) {
    if horizontal {
        (value, category)
    } else {
        (category, value)
    }
}
