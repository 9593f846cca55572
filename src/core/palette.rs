use std::borrow::Cow;

use crate::core::Dataset;

/// Default series palette; shared by both themes.
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4",
    "#ea7ccc",
];

/// Ordered palette with index-based cycling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorResolver {
    palette: Vec<Cow<'static, str>>,
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| Cow::Borrowed(*c)).collect(),
        }
    }
}

impl ColorResolver {
    /// Explicit colors win when non-empty; otherwise the default palette is
    /// used. Themes only change structural colors, never the series palette.
    #[must_use]
    pub fn resolve(explicit: Option<&[String]>) -> Self {
        match explicit {
            Some(colors) if !colors.is_empty() => Self {
                palette: colors.iter().cloned().map(Cow::Owned).collect(),
            },
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn palette(&self) -> Vec<String> {
        self.palette.iter().map(|c| c.to_string()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// `palette[index % len]`.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }

    /// Explicit dataset color, falling back to the cycled palette entry.
    ///
    /// Precedence: `color`, `borderColor`, first `backgroundColor`.
    #[must_use]
    pub fn dataset_color(&self, dataset: &Dataset, index: usize) -> String {
        dataset
            .color
            .as_deref()
            .or(dataset.border_color.as_deref())
            .or_else(|| dataset.background_color.as_ref().and_then(|bg| bg.first()))
            .unwrap_or_else(|| self.color_at(index))
            .to_owned()
    }
}
