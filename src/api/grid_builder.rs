use serde_json::{Value, json};

use super::{GridConfig, Toggle};

pub const DEFAULT_GRID_LEFT: &str = "3%";
pub const DEFAULT_GRID_RIGHT: &str = "4%";
pub const DEFAULT_GRID_BOTTOM: &str = "3%";
/// Leaves room for a top legend.
pub const DEFAULT_GRID_TOP: &str = "15%";

/// Grid descriptor.
///
/// A disabled grid keeps the default margins but is marked hidden, so the
/// plot area does not jump when the grid is toggled.
#[must_use]
pub fn build_grid(grid: &Toggle<GridConfig>) -> Value {
    let shown = grid.resolve();
    let config = shown.clone().unwrap_or_default();
    json!({
        "show": shown.is_some(),
        "left": config.left.as_deref().unwrap_or(DEFAULT_GRID_LEFT),
        "right": config.right.as_deref().unwrap_or(DEFAULT_GRID_RIGHT),
        "top": config.top.as_deref().unwrap_or(DEFAULT_GRID_TOP),
        "bottom": config.bottom.as_deref().unwrap_or(DEFAULT_GRID_BOTTOM),
        "containLabel": config.contain_label.unwrap_or(true),
    })
}
