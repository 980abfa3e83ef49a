mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawInstruction, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{LinePrimitive, RectPrimitive, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "svg-backend")]
mod svg_backend;
#[cfg(feature = "svg-backend")]
pub use svg_backend::SvgRenderer;
