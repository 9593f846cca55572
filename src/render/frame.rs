use crate::core::Dimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::OptionTree;

/// What the host should show inside the chart container.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    /// Data is still loading; the host draws a spinner.
    Spinner,
    /// No datasets; the host draws the message.
    EmptyMessage(String),
    /// Fully composed option tree for the charting backend.
    Options(OptionTree),
}

/// Backend-agnostic payload for one chart update.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub dimensions: Dimensions,
    pub animation: bool,
    pub content: FrameContent,
}

impl RenderFrame {
    #[must_use]
    pub fn new(dimensions: Dimensions, content: FrameContent) -> Self {
        Self {
            dimensions,
            animation: true,
            content,
        }
    }

    #[must_use]
    pub fn with_animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn options(&self) -> Option<&OptionTree> {
        match &self.content {
            FrameContent::Options(tree) => Some(tree),
            FrameContent::Spinner | FrameContent::EmptyMessage(_) => None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("width", &self.dimensions.width),
            ("height", &self.dimensions.height),
        ] {
            if value.trim().is_empty() {
                return Err(ChartError::InvalidDimension(format!(
                    "frame {name} must not be empty"
                )));
            }
        }

        if let FrameContent::Options(tree) = &self.content {
            if !tree.contains_key("series") {
                return Err(ChartError::InvalidData(
                    "option tree must contain `series`".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
