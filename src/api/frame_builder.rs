use tracing::debug;

use crate::api::ChartEngineConfig;
use crate::core::{
    Dataset, PlotMetrics, StepScale, ValueInterval, Viewport, layout_x_slots, layout_y_gridlines,
    project_bar_rects,
};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Stroke spec shared by every gridline and axis label.
const GRID_COLOR: &str = "rgba(128, 128, 128, 0.5)";
const GRID_STROKE_WIDTH: f64 = 1.0;
/// Text anchors by baseline; every label drops this far below its anchor.
const TEXT_BASELINE_OFFSET: f64 = 15.0;
/// Labels longer than this are clipped.
const LABEL_MAX_CHARS: usize = 10;

/// Builds the complete, ordered draw-instruction list for one dataset.
///
/// Pure function of its inputs: identical arguments produce identical frames.
/// Every contract check runs before the first instruction is emitted, so a
/// failed render produces no partial output.
///
/// Emission order is the paint-stacking order: title, vertical gridline and
/// label per slot (last label first), horizontal gridline and value label per
/// step (baseline upward), then one rect per data point (last first).
pub fn build_render_frame(
    dataset: &Dataset,
    viewport: Viewport,
    config: ChartEngineConfig,
) -> ChartResult<RenderFrame> {
    config.validate()?;
    dataset.validate()?;

    let metrics = PlotMetrics::new(viewport, config.outer_padding, config.grid_margin)?;
    let interval = ValueInterval::from_values(&dataset.series.values)?;
    let scale = StepScale::from_interval(interval, metrics.plot_height)?;
    let slots = layout_x_slots(dataset.labels.len(), &metrics);
    let gridlines = layout_y_gridlines(interval, scale, &metrics);
    let bars = project_bar_rects(&dataset.series.values, &slots, interval, scale, &metrics)?;

    debug!(
        labels = dataset.labels.len(),
        step_count = scale.step_count,
        step_value = scale.step_value,
        "laid out bar chart frame"
    );

    let mut frame = RenderFrame::new(viewport);

    // Title, colored with the series stroke so it reads as part of the series.
    frame.push_text(label_text(
        &dataset.series.name,
        viewport.origin.x,
        viewport.origin.y,
        &dataset.series.stroke_color,
    ));

    for slot in slots.iter().rev() {
        frame.push_line(LinePrimitive::new(
            slot.line_x,
            metrics.baseline_y,
            slot.line_x,
            metrics.baseline_y - (metrics.plot_height + config.grid_margin),
            GRID_STROKE_WIDTH,
            GRID_COLOR,
        ));
        frame.push_text(label_text(
            &dataset.labels[slot.index],
            slot.label_x,
            metrics.baseline_y,
            GRID_COLOR,
        ));
    }

    let y_label_x = viewport.origin.x - config.grid_margin + config.outer_padding * 0.5;
    for gridline in &gridlines {
        frame.push_line(LinePrimitive::new(
            metrics.right_x,
            gridline.y,
            metrics.right_x - (metrics.plot_width + config.grid_margin),
            gridline.y,
            GRID_STROKE_WIDTH,
            GRID_COLOR,
        ));
        frame.push_text(label_text(
            &gridline.value.to_string(),
            y_label_x,
            gridline.y - config.grid_margin,
            GRID_COLOR,
        ));
    }

    // Rects come last so bars paint over the grid.
    for bar in bars.iter().rev() {
        frame.push_rect(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            &dataset.series.fill_color,
            &dataset.series.stroke_color,
            dataset.series.stroke_width,
        ));
    }

    Ok(frame)
}

fn label_text(text: &str, x: f64, y: f64, color: &str) -> TextPrimitive {
    let clipped: String = text.chars().take(LABEL_MAX_CHARS).collect();
    TextPrimitive::new(clipped, x, y + TEXT_BASELINE_OFFSET, color)
}
