use smallvec::SmallVec;

use crate::core::DataValue;

/// Normalized scatter coordinate: `[x, y]` or `[x, y, v]`.
pub type ScatterPoint = SmallVec<[f64; 3]>;

/// Classifies one scatter entry by shape.
///
/// - arrays pass through unchanged
/// - `{x, y, value?}` maps to `[x, y, value ?? 1]`
/// - bare numbers map to `[index, n]`
#[must_use]
pub fn normalize_scatter_point(index: usize, value: &DataValue) -> ScatterPoint {
    match value {
        DataValue::Array(coords) => coords.iter().copied().collect(),
        DataValue::Point { x, y, value } => SmallVec::from_buf([*x, *y, value.unwrap_or(1.0)]),
        DataValue::Number(n) => SmallVec::from_slice(&[index as f64, *n]),
    }
}

/// Symbol size for a normalized point: `sqrt(v) * base / 5` when a third
/// coordinate exists, otherwise `base`.
#[must_use]
pub fn scatter_symbol_size(point: &[f64], base_size: f64) -> f64 {
    match point.get(2) {
        Some(weight) => weight.sqrt() * base_size / 5.0,
        None => base_size,
    }
}
