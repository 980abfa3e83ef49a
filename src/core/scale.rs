use serde::{Deserialize, Serialize};

use crate::core::interval::ValueInterval;
use crate::error::{ChartError, ChartResult};

/// Gridline density bounds: one horizontal gridline roughly every 30 to 50
/// pixels keeps value labels readable.
const MAX_PX_PER_STEP: f64 = 50.0;
const MIN_PX_PER_STEP: f64 = 30.0;

/// Vertical step scale governing gridline spacing and bar-height conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepScale {
    /// Number of steps between axis minimum and maximum. Always even.
    pub step_count: usize,
    /// Value covered by one step.
    pub step_value: f64,
    /// Pixels covered by one step.
    pub px_per_step: f64,
}

impl StepScale {
    /// Searches for the smallest even step count whose steps land on round
    /// values.
    ///
    /// Candidates run from `ceil(plot_height / 50)` up to
    /// `ceil(plot_height / 30)`; the first even candidate that evenly divides
    /// the interval span wins. An exhausted search is an explicit error,
    /// never a half-built scale. A zero span (every value 0) has no usable
    /// step either and fails the same way.
    pub fn from_interval(interval: ValueInterval, plot_height: f64) -> ChartResult<Self> {
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ChartError::InvalidArgument(format!(
                "plot height must be finite and > 0, got {plot_height}"
            )));
        }

        let span = interval.span();
        let min_steps = (plot_height / MAX_PX_PER_STEP).ceil() as usize;
        let max_steps = (plot_height / MIN_PX_PER_STEP).ceil() as usize;

        if span > 0.0 {
            for step_count in min_steps..=max_steps {
                if step_count % 2 == 0 && span % step_count as f64 == 0.0 {
                    return Ok(Self {
                        step_count,
                        step_value: span / step_count as f64,
                        px_per_step: plot_height / step_count as f64,
                    });
                }
            }
        }

        Err(ChartError::ScaleNotFound {
            span,
            min_steps,
            max_steps,
        })
    }

    /// Pixels of bar height per unit of value.
    #[must_use]
    pub fn px_per_unit(self) -> f64 {
        self.px_per_step / self.step_value
    }
}
