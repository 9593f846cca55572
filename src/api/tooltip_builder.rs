use serde_json::{Map, Value, json};

use crate::core::ThemeTokens;

use super::{AxisPointerKind, Toggle, TooltipConfig, TooltipTrigger};

/// Tooltip descriptor, or `None` when switched off.
///
/// `default_trigger` is `Axis` for cartesian charts and `Item` for donut,
/// scatter and radar. Axis-triggered tooltips default to a crosshair pointer.
#[must_use]
pub fn build_tooltip(
    tooltip: &Toggle<TooltipConfig>,
    default_trigger: TooltipTrigger,
    tokens: &ThemeTokens,
) -> Option<Value> {
    let config = tooltip.resolve()?;
    let trigger = config.trigger.unwrap_or(default_trigger);

    let mut descriptor = Map::new();
    descriptor.insert("trigger".to_owned(), json!(trigger));
    descriptor.insert(
        "backgroundColor".to_owned(),
        json!(tokens.tooltip_background),
    );
    descriptor.insert("borderColor".to_owned(), json!(tokens.tooltip_border));
    descriptor.insert(
        "textStyle".to_owned(),
        json!({ "color": tokens.tooltip_text }),
    );

    let pointer = match (config.axis_pointer, trigger) {
        (Some(kind), _) => Some(kind),
        (None, TooltipTrigger::Axis) => Some(AxisPointerKind::Cross),
        (None, TooltipTrigger::Item | TooltipTrigger::None) => None,
    };
    if let Some(kind) = pointer {
        descriptor.insert("axisPointer".to_owned(), json!({ "type": kind }));
    }
    if let Some(formatter) = config.formatter {
        descriptor.insert("formatter".to_owned(), json!(formatter));
    }
    Some(Value::Object(descriptor))
}
