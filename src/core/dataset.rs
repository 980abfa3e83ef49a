use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One numeric series with its presentation attributes.
///
/// Colors are CSS color strings handed to the backend untouched; the layout
/// engine never inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl BarSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            fill_color: "rgba(64, 128, 255, 0.6)".to_owned(),
            stroke_color: "rgb(64, 128, 255)".to_owned(),
            stroke_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fill_color = fill_color.into();
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, stroke_color: impl Into<String>) -> Self {
        self.stroke_color = stroke_color.into();
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Ordered category labels plus the series rendered over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub labels: Vec<String>,
    pub series: BarSeries,
}

impl Dataset {
    #[must_use]
    pub fn new(labels: Vec<String>, series: BarSeries) -> Self {
        Self { labels, series }
    }

    /// Checks the contract every render call relies on.
    ///
    /// Runs before any geometry work; a failed check aborts the whole render
    /// with no partial output.
    pub fn validate(&self) -> ChartResult<()> {
        if self.series.values.len() != self.labels.len() {
            return Err(ChartError::ShapeMismatch {
                labels: self.labels.len(),
                values: self.series.values.len(),
            });
        }
        if self.labels.is_empty() {
            return Err(ChartError::InvalidArgument(
                "dataset must contain at least one label".to_owned(),
            ));
        }
        for (index, value) in self.series.values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series value at index {index} must be finite"
                )));
            }
        }
        if !self.series.stroke_width.is_finite() || self.series.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "series stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
