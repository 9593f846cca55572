use crate::error::ChartResult;
use crate::render::{FrameContent, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates every frame and records what it was asked to show.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_series_count(&self) -> usize {
        self.last_frame
            .as_ref()
            .and_then(RenderFrame::options)
            .map_or(0, |tree| tree.series().len())
    }

    #[must_use]
    pub fn showed_spinner(&self) -> bool {
        matches!(
            self.last_frame.as_ref().map(|frame| &frame.content),
            Some(FrameContent::Spinner)
        )
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
