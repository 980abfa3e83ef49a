use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Draw command for one line segment in pixel space.
///
/// The color is an opaque CSS color string; the engine passes the dataset's
/// presentation attributes through to the backend verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: String,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color: color.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(ChartError::InvalidData(
                "line color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one label in pixel space.
///
/// Empty text is allowed: empty category labels still occupy their slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color: color.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(ChartError::InvalidData(
                "text color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one filled, stroked rectangle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill_color: impl Into<String>,
        stroke_color: impl Into<String>,
        stroke_width: f64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color: fill_color.into(),
            stroke_color: stroke_color.into(),
            stroke_width,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect position must be finite".to_owned(),
            ));
        }
        // Zero-height rects are legal: a data value of exactly 0 renders one.
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect extents must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if self.fill_color.is_empty() {
            return Err(ChartError::InvalidData(
                "rect fill color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
