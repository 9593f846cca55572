use tracing::debug;

use crate::core::resolve_dimensions;
use crate::error::ChartResult;
use crate::render::{FrameContent, RenderFrame, Renderer};

use super::{ChartSpec, ComposedChart, compose};

/// Thin framework-glue adapter.
///
/// A host binding forwards every prop change as a fresh `ChartSpec`; the host
/// composes it and hands the resulting frame to its renderer. It keeps no
/// chart state of its own between calls.
pub struct ChartHost<R: Renderer> {
    renderer: R,
}

impl<R: Renderer> ChartHost<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Composes `spec` and renders a spinner, an empty message, or the
    /// option tree.
    pub fn present(&mut self, spec: &ChartSpec) -> ChartResult<ComposedChart> {
        let common = spec.common();
        let dimensions = resolve_dimensions(common.width.as_ref(), common.height)?;
        let composed = compose(spec)?;

        let content = match &composed {
            ComposedChart::Loading => FrameContent::Spinner,
            ComposedChart::Empty { message } => FrameContent::EmptyMessage(message.clone()),
            ComposedChart::Ready(tree) => FrameContent::Options(tree.clone()),
        };
        debug!(
            kind = spec.kind_name(),
            width = %dimensions.width,
            height = %dimensions.height,
            "present chart frame"
        );
        let frame = RenderFrame::new(dimensions, content).with_animation(common.animation);
        self.renderer.render(&frame)?;
        Ok(composed)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
