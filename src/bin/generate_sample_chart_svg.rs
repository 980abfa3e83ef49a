//! Renders a sample dataset through the SVG backend and writes the document
//! to `sample_chart.svg` in the working directory.

use barchart_rs::api::{ChartEngine, ChartEngineConfig};
use barchart_rs::core::{BarSeries, Dataset, Viewport};
use barchart_rs::error::ChartResult;
use barchart_rs::render::SvgRenderer;

const OUTPUT_PATH: &str = "sample_chart.svg";

fn main() -> ChartResult<()> {
    let _ = barchart_rs::telemetry::init_default_tracing();

    let labels = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        .map(str::to_owned)
        .to_vec();
    let series = BarSeries::new("Net flow", vec![40.0, -15.0, 25.0, 60.0, -5.0, 30.0])
        .with_fill_color("rgba(255, 99, 132, 0.5)")
        .with_stroke_color("rgb(255, 99, 132)")
        .with_stroke_width(2.0);
    let dataset = Dataset::new(labels, series);
    let viewport = Viewport::new(640.0, 420.0);

    let mut engine = ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default())?;
    engine.render(&dataset, viewport)?;
    engine.renderer().save(OUTPUT_PATH)?;

    println!("wrote {OUTPUT_PATH}");
    Ok(())
}
