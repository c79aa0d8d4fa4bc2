use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw lines first, then rects, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// Plot rectangle the scene was laid out with, when one fit the viewport.
    pub plot_area: Option<PlotArea>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            plot_area: None,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_plot_area(mut self, plot_area: PlotArea) -> Self {
        self.plot_area = Some(plot_area);
        self
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    /// Empty strings are skipped.
    pub fn push_text(&mut self, text: TextPrimitive) {
        if !text.text.is_empty() {
            self.texts.push(text);
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    /// Texts whose content equals `text`.
    pub fn texts_matching<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a TextPrimitive> {
        self.texts.iter().filter(move |primitive| primitive.text == text)
    }
}
