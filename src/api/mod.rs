mod engine;
mod engine_config;
mod frame_builder;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, DEFAULT_GRID_MARGIN, DEFAULT_OUTER_PADDING};
pub use frame_builder::build_render_frame;
