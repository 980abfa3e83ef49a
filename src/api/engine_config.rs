use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default outer padding reserved around the drawing area, in pixels.
pub const DEFAULT_OUTER_PADDING: f64 = 50.0;
/// Default margin between gridlines and the elements they frame, in pixels.
pub const DEFAULT_GRID_MARGIN: f64 = 10.0;

/// Public engine bootstrap configuration.
///
/// Padding values that used to be fixed constants are explicit fields here so
/// host applications can override them. The type is serializable so chart
/// setup can be persisted without an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_outer_padding")]
    pub outer_padding: f64,
    #[serde(default = "default_grid_margin")]
    pub grid_margin: f64,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            outer_padding: DEFAULT_OUTER_PADDING,
            grid_margin: DEFAULT_GRID_MARGIN,
        }
    }

    #[must_use]
    pub fn with_outer_padding(mut self, outer_padding: f64) -> Self {
        self.outer_padding = outer_padding;
        self
    }

    #[must_use]
    pub fn with_grid_margin(mut self, grid_margin: f64) -> Self {
        self.grid_margin = grid_margin;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.outer_padding.is_finite() || self.outer_padding < 0.0 {
            return Err(ChartError::InvalidArgument(format!(
                "outer padding must be finite and >= 0, got {}",
                self.outer_padding
            )));
        }
        if !self.grid_margin.is_finite() || self.grid_margin < 0.0 {
            return Err(ChartError::InvalidArgument(format!(
                "grid margin must be finite and >= 0, got {}",
                self.grid_margin
            )));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_outer_padding() -> f64 {
    DEFAULT_OUTER_PADDING
}

fn default_grid_margin() -> f64 {
    DEFAULT_GRID_MARGIN
}
