use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Translation offset of the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Drawing-surface pixel dimensions and translation offset.
///
/// Supplied once per render call and immutable for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub origin: Origin,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin: Origin::default(),
        }
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.origin.is_finite()
    }
}

/// Frame geometry derived once per render from viewport and configuration.
///
/// Every slot, gridline and bar coordinate downstream is computed from these
/// anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMetrics {
    pub viewport: Viewport,
    pub outer_padding: f64,
    pub grid_margin: f64,
    /// Horizontal extent available to x slots.
    pub plot_width: f64,
    /// Vertical extent available to y steps.
    pub plot_height: f64,
    /// Y of the bottom gridline, where the axis minimum sits.
    pub baseline_y: f64,
    /// X anchor at the right edge of the drawing area.
    pub right_x: f64,
}

impl PlotMetrics {
    pub fn new(viewport: Viewport, outer_padding: f64, grid_margin: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let plot_width = viewport.width - outer_padding;
        let plot_height = viewport.height - outer_padding;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidArgument(format!(
                "outer padding {outer_padding} leaves no drawing area inside a {}x{} viewport",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            viewport,
            outer_padding,
            grid_margin,
            plot_width,
            plot_height,
            baseline_y: viewport.origin.y + viewport.height - outer_padding * 0.5,
            right_x: viewport.origin.x + viewport.width - grid_margin,
        })
    }
}
