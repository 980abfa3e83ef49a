pub mod axis;
pub mod bars;
pub mod dataset;
pub mod interval;
pub mod scale;
pub mod types;

pub use axis::{XSlot, YGridline, layout_x_slots, layout_y_gridlines};
pub use bars::{AnchorRegime, BarRect, project_bar_rects};
pub use dataset::{BarSeries, Dataset};
pub use interval::ValueInterval;
pub use scale::StepScale;
pub use types::{Origin, PlotMetrics, Viewport};
