use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rounded y-axis bounds enclosing every series value, always containing 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueInterval {
    pub min: f64,
    pub max: f64,
}

impl ValueInterval {
    /// Derives the axis bounds for one series.
    ///
    /// The positive extent is rounded up to the next multiple of 10 and
    /// floored at 0. When no positive extent exists the whole range sits
    /// below zero, rounded outward. When signs are mixed the lower bound
    /// mirrors the upper bound, giving an axis symmetric around 0 rather
    /// than one proportional to the negative extent.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::InvalidArgument(
                "cannot derive a value interval from an empty series".to_owned(),
            ));
        }

        let mut raw_min = f64::INFINITY;
        let mut raw_max = f64::NEG_INFINITY;
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series value at index {index} must be finite"
                )));
            }
            raw_min = raw_min.min(value);
            raw_max = raw_max.max(value);
        }

        let max = round_up_to_ten(raw_max.max(0.0));
        let min = if max == 0.0 {
            -round_up_to_ten(raw_min.abs())
        } else if raw_min >= 0.0 {
            0.0
        } else {
            -max
        };

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

fn round_up_to_ten(value: f64) -> f64 {
    (value / 10.0).ceil() * 10.0
}
