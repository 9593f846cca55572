use serde::{Deserialize, Serialize};

/// Light/dark selector for structural chart colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Structural (non-series) colors consumed by axis, legend and tooltip builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub text: &'static str,
    pub muted_text: &'static str,
    pub axis_line: &'static str,
    pub split_line: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
    pub gauge_track: &'static str,
}

const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    text: "#374151",
    muted_text: "#6b7280",
    axis_line: "#d1d5db",
    split_line: "#e5e7eb",
    tooltip_background: "#ffffff",
    tooltip_border: "#e5e7eb",
    tooltip_text: "#111827",
    gauge_track: "#e5e7eb",
};

const DARK_TOKENS: ThemeTokens = ThemeTokens {
    text: "#d1d5db",
    muted_text: "#9ca3af",
    axis_line: "#4b5563",
    split_line: "#374151",
    tooltip_background: "#1f2937",
    tooltip_border: "#374151",
    tooltip_text: "#f9fafb",
    gauge_track: "#374151",
};

impl Theme {
    #[must_use]
    pub const fn tokens(self) -> &'static ThemeTokens {
        match self {
            Self::Light => &LIGHT_TOKENS,
            Self::Dark => &DARK_TOKENS,
        }
    }
}
