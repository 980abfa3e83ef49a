use svg::Document;
use svg::node::element::{Line, Rectangle, Text};

use crate::error::{ChartError, ChartResult};
use crate::render::{DrawInstruction, RenderFrame, Renderer};

/// SVG document renderer backend.
///
/// Builds a complete `svg::Document` per frame and keeps it until the next
/// render so callers can serialize or save it afterwards.
#[derive(Default)]
pub struct SvgRenderer {
    last_document: Option<Document>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document built by the most recent render, if any.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.last_document.as_ref()
    }

    pub fn to_svg_string(&self) -> ChartResult<String> {
        self.last_document
            .as_ref()
            .map(ToString::to_string)
            .ok_or_else(|| ChartError::InvalidData("no frame has been rendered yet".to_owned()))
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let document = self
            .last_document
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("no frame has been rendered yet".to_owned()))?;
        svg::save(path, document)
            .map_err(|err| map_backend_error("failed to write svg document", &err))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut document = Document::new()
            .set("width", frame.viewport.width)
            .set("height", frame.viewport.height);

        for instruction in &frame.instructions {
            document = match instruction {
                DrawInstruction::Line(line) => document.add(
                    Line::new()
                        .set("x1", line.x1)
                        .set("y1", line.y1)
                        .set("x2", line.x2)
                        .set("y2", line.y2)
                        .set("stroke", line.color.as_str())
                        .set("stroke-width", line.stroke_width),
                ),
                DrawInstruction::Text(text) => document.add(
                    Text::new(text.text.as_str())
                        .set("x", text.x)
                        .set("y", text.y)
                        .set("fill", text.color.as_str()),
                ),
                DrawInstruction::Rect(rect) => document.add(
                    Rectangle::new()
                        .set("x", rect.x)
                        .set("y", rect.y)
                        .set("width", rect.width)
                        .set("height", rect.height)
                        .set("fill", rect.fill_color.as_str())
                        .set("stroke", rect.stroke_color.as_str())
                        .set("stroke-width", rect.stroke_width),
                ),
            };
        }

        self.last_document = Some(document);
        Ok(())
    }
}

fn map_backend_error(prefix: &str, err: &std::io::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
