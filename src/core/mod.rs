pub mod dimension;
pub mod palette;
pub mod scatter;
pub mod theme;
pub mod types;

pub use dimension::{Dimension, Dimensions, resolve_dimensions};
pub use palette::{ColorResolver, DEFAULT_PALETTE};
pub use scatter::{ScatterPoint, normalize_scatter_point, scatter_symbol_size};
pub use theme::{Theme, ThemeTokens};
pub use types::{ChartData, ColorSpec, DataValue, Dataset};
