use serde::{Deserialize, Serialize};

use crate::core::axis::XSlot;
use crate::core::interval::ValueInterval;
use crate::core::scale::StepScale;
use crate::core::types::PlotMetrics;
use crate::error::{ChartError, ChartResult};

/// Vertical anchoring regime, decided once per dataset from the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorRegime {
    /// Every value >= 0: bars grow upward from the baseline.
    NonNegative,
    /// Positive and negative values mixed: bars grow away from the vertical
    /// midpoint of the drawing area.
    MixedSign,
    /// No positive extent: bars hang from a fixed offset below the top edge.
    NonPositive,
}

impl AnchorRegime {
    #[must_use]
    pub fn from_interval(interval: ValueInterval) -> Self {
        if interval.max == 0.0 {
            Self::NonPositive
        } else if interval.min < 0.0 {
            Self::MixedSign
        } else {
            Self::NonNegative
        }
    }
}

/// Resolved bar rectangle for one data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects series values into bar rectangles, one per slot.
///
/// A value of exactly 0 yields a zero-height rect at its slot anchor.
pub fn project_bar_rects(
    values: &[f64],
    slots: &[XSlot],
    interval: ValueInterval,
    scale: StepScale,
    metrics: &PlotMetrics,
) -> ChartResult<Vec<BarRect>> {
    if values.len() != slots.len() {
        return Err(ChartError::ShapeMismatch {
            labels: slots.len(),
            values: values.len(),
        });
    }

    let regime = AnchorRegime::from_interval(interval);
    let half_height = metrics.plot_height * 0.5;

    let mut bars = Vec::with_capacity(values.len());
    for (slot, &value) in slots.iter().zip(values) {
        let height = value.abs() * scale.px_per_unit();
        let y = match regime {
            AnchorRegime::NonPositive => metrics.outer_padding * 0.5,
            AnchorRegime::MixedSign if value > 0.0 => metrics.baseline_y - height - half_height,
            AnchorRegime::MixedSign => metrics.baseline_y - half_height,
            AnchorRegime::NonNegative => metrics.baseline_y - height,
        };
        bars.push(BarRect {
            index: slot.index,
            x: slot.bar_left,
            y,
            width: slot.bar_width,
            height,
        });
    }

    Ok(bars)
}
