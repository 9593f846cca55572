use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_HEIGHT_PX: f64 = 300.0;
pub const DEFAULT_WIDTH: &str = "100%";

/// Width input: pixels or any CSS length passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self::Css(value.to_owned())
    }
}

/// Renderer-ready container dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: String,
    pub height: String,
}

/// Normalizes width/height inputs into dimension strings.
///
/// Negative or zero sizes are passed through; only non-finite numbers are
/// rejected because they cannot be formatted as a CSS length.
pub fn resolve_dimensions(width: Option<&Dimension>, height: Option<f64>) -> ChartResult<Dimensions> {
    let height = height.unwrap_or(DEFAULT_HEIGHT_PX);
    let width = match width {
        Some(Dimension::Px(px)) => px_string("width", *px)?,
        Some(Dimension::Css(css)) => css.clone(),
        None => DEFAULT_WIDTH.to_owned(),
    };

    Ok(Dimensions {
        width,
        height: px_string("height", height)?,
    })
}

fn px_string(field: &str, value: f64) -> ChartResult<String> {
    if !value.is_finite() {
        return Err(ChartError::InvalidDimension(format!(
            "{field} must be finite, got {value}"
        )));
    }
    Ok(format!("{value}px"))
}

#[cfg(test)]
mod tests {
    use super::{Dimension, resolve_dimensions};

    #[test]
    fn fractional_pixels_keep_their_fraction() {
        let dims = resolve_dimensions(Some(&Dimension::Px(12.5)), Some(99.5)).expect("resolve");
        assert_eq!(dims.width, "12.5px");
        assert_eq!(dims.height, "99.5px");
    }

    #[test]
    fn non_finite_height_is_rejected() {
        assert!(resolve_dimensions(None, Some(f64::INFINITY)).is_err());
    }
}
