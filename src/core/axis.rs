use serde::{Deserialize, Serialize};

use crate::core::interval::ValueInterval;
use crate::core::scale::StepScale;
use crate::core::types::PlotMetrics;

/// Resolved geometry for one x-axis slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XSlot {
    pub index: usize,
    /// X of the slot's vertical gridline, the left edge of the slot.
    pub line_x: f64,
    /// X where the slot label anchors.
    pub label_x: f64,
    /// Left edge of the bar inside the slot.
    pub bar_left: f64,
    /// Bar width: the slot minus one grid margin on each side.
    pub bar_width: f64,
}

/// Partitions the drawing area into equal slots, one per label, anchored from
/// the right edge of the drawing area inward.
#[must_use]
pub fn layout_x_slots(label_count: usize, metrics: &PlotMetrics) -> Vec<XSlot> {
    if label_count == 0 {
        return Vec::new();
    }

    let slot_width = metrics.plot_width / label_count as f64;
    let mut slots = Vec::with_capacity(label_count);
    for index in 0..label_count {
        let line_x = metrics.right_x - (label_count - index) as f64 * slot_width;
        slots.push(XSlot {
            index,
            line_x,
            label_x: line_x + metrics.grid_margin,
            bar_left: line_x + metrics.grid_margin,
            bar_width: slot_width - 2.0 * metrics.grid_margin,
        });
    }
    slots
}

/// Resolved geometry for one horizontal gridline and its value label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YGridline {
    pub step: usize,
    pub y: f64,
    pub value: f64,
}

/// Lays out `step_count + 1` horizontal gridlines from the baseline upward,
/// each annotated with `min + step * step_value`.
#[must_use]
pub fn layout_y_gridlines(
    interval: ValueInterval,
    scale: StepScale,
    metrics: &PlotMetrics,
) -> Vec<YGridline> {
    let mut gridlines = Vec::with_capacity(scale.step_count + 1);
    for step in 0..=scale.step_count {
        gridlines.push(YGridline {
            step,
            y: metrics.baseline_y - step as f64 * scale.px_per_step,
            value: interval.min + step as f64 * scale.step_value,
        });
    }
    gridlines
}
