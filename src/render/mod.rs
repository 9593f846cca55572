mod frame;
mod null_renderer;
mod option_tree;

pub use frame::{FrameContent, RenderFrame};
pub use null_renderer::NullRenderer;
pub use option_tree::OptionTree;

use crate::error::ChartResult;

/// Contract implemented by any charting backend.
///
/// Backends receive a fully composed, deterministic `RenderFrame`; drawing,
/// resizing and animation stay on their side of this seam.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
