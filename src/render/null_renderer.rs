use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and server-side layout checks.
///
/// It validates every frame and keeps the last one so callers can inspect
/// what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
    last_frame: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
