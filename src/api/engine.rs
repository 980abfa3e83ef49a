use crate::api::{ChartEngineConfig, build_render_frame};
use crate::core::{Dataset, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Main orchestration facade consumed by host applications.
///
/// One render call is a synchronous, self-contained computation: it owns all
/// intermediate layout state and shares nothing across calls, so identical
/// inputs always produce identical frames.
#[derive(Debug)]
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    /// Lays out one frame without touching the renderer.
    pub fn build_render_frame(
        &self,
        dataset: &Dataset,
        viewport: Viewport,
    ) -> ChartResult<RenderFrame> {
        build_render_frame(dataset, viewport, self.config)
    }

    /// Lays out one frame and hands it to the renderer.
    pub fn render(&mut self, dataset: &Dataset, viewport: Viewport) -> ChartResult<()> {
        let frame = self.build_render_frame(dataset, viewport)?;
        self.renderer.render(&frame)
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
