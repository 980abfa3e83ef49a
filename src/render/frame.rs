use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// One draw command with fully resolved pixel coordinates.
///
/// All kinds share a single ordered list because cross-kind paint order is
/// part of the output contract: later instructions paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawInstruction {
    Line(LinePrimitive),
    Text(TextPrimitive),
    Rect(RectPrimitive),
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Produced by the layout engine, consumed once by a renderer, then discarded;
/// nothing is kept across render calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub instructions: Vec<DrawInstruction>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            instructions: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.instructions.push(DrawInstruction::Line(line));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.instructions.push(DrawInstruction::Text(text));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.instructions.push(DrawInstruction::Rect(rect));
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for instruction in &self.instructions {
            match instruction {
                DrawInstruction::Line(line) => line.validate()?,
                DrawInstruction::Text(text) => text.validate()?,
                DrawInstruction::Rect(rect) => rect.validate()?,
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Line(_)))
            .count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Text(_)))
            .count()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::Rect(_)))
            .count()
    }
}
