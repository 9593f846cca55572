use serde_json::{Value, json};

use crate::core::ThemeTokens;

use super::LegendPosition;

/// Legend descriptor, or `None` when the legend is switched off.
///
/// Top/bottom legends run horizontally and are centered; left/right legends
/// run vertically against their edge.
#[must_use]
pub fn build_legend(
    enabled: bool,
    position: LegendPosition,
    names: &[String],
    tokens: &ThemeTokens,
) -> Option<Value> {
    if !enabled {
        return None;
    }

    let mut legend = match position {
        LegendPosition::Top => json!({ "orient": "horizontal", "top": 0, "left": "center" }),
        LegendPosition::Bottom => json!({ "orient": "horizontal", "bottom": 0, "left": "center" }),
        LegendPosition::Left => json!({ "orient": "vertical", "left": 0, "top": "middle" }),
        LegendPosition::Right => json!({ "orient": "vertical", "right": 0, "top": "middle" }),
    };
    if let Some(fields) = legend.as_object_mut() {
        fields.insert("data".to_owned(), json!(names));
        fields.insert("textStyle".to_owned(), json!({ "color": tokens.text }));
    }
    Some(legend)
}
