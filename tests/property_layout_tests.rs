use barchart_rs::api::{ChartEngineConfig, build_render_frame};
use barchart_rs::core::{
    BarSeries, Dataset, PlotMetrics, StepScale, ValueInterval, Viewport, layout_x_slots,
};
use proptest::prelude::*;

fn dataset_from(values: Vec<f64>) -> Dataset {
    let labels = (0..values.len()).map(|i| format!("cat {i}")).collect();
    Dataset::new(labels, BarSeries::new("series", values))
}

proptest! {
    #[test]
    fn interval_always_contains_zero_in_round_bounds(
        values in prop::collection::vec(-1000.0f64..1000.0, 1..50)
    ) {
        let interval = ValueInterval::from_values(&values).expect("interval");

        prop_assert!(interval.min <= 0.0);
        prop_assert!(interval.max >= 0.0);
        prop_assert_eq!((interval.min / 10.0).fract(), 0.0);
        prop_assert_eq!((interval.max / 10.0).fract(), 0.0);

        // The positive extent is always covered; the negative extent is only
        // covered while no positive values exist (mixed signs mirror instead).
        let raw_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let raw_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assert!(interval.max >= raw_max);
        if raw_min >= 0.0 {
            prop_assert_eq!(interval.min, 0.0);
        } else if interval.max > 0.0 {
            prop_assert_eq!(interval.min, -interval.max);
        } else {
            prop_assert!(interval.min <= raw_min);
        }
    }

    #[test]
    fn accepted_step_count_is_the_smallest_even_divisor_in_range(
        tens in 1usize..200,
        plot_height in 60.0f64..800.0
    ) {
        let interval = ValueInterval { min: 0.0, max: (tens * 10) as f64 };

        if let Ok(scale) = StepScale::from_interval(interval, plot_height) {
            let span = interval.span();
            let min_steps = (plot_height / 50.0).ceil() as usize;

            prop_assert_eq!(scale.step_count % 2, 0);
            prop_assert!(scale.step_count >= min_steps);
            prop_assert_eq!(span % scale.step_count as f64, 0.0);
            prop_assert_eq!(scale.step_value * scale.step_count as f64, span);

            for candidate in min_steps..scale.step_count {
                prop_assert!(candidate % 2 != 0 || span % candidate as f64 != 0.0);
            }
        }
    }

    #[test]
    fn frame_layout_is_deterministic_and_complete(
        values in prop::collection::vec(-100.0f64..100.0, 1..=12)
    ) {
        prop_assume!(values.iter().any(|v| *v != 0.0));

        let dataset = dataset_from(values.clone());
        let viewport = Viewport::new(450.0, 450.0);
        let config = ChartEngineConfig::default();

        let frame = build_render_frame(&dataset, viewport, config).expect("frame");
        let again = build_render_frame(&dataset, viewport, config).expect("frame again");
        prop_assert_eq!(&frame, &again);

        let gridline_count = frame.line_count() - values.len();
        prop_assert_eq!(frame.rect_count(), values.len());
        prop_assert_eq!(frame.text_count(), 1 + values.len() + gridline_count);
        frame.validate().expect("valid frame");
    }

    #[test]
    fn bars_stay_inside_their_slots(
        values in prop::collection::vec(-100.0f64..100.0, 1..=12)
    ) {
        prop_assume!(values.iter().any(|v| *v != 0.0));

        let dataset = dataset_from(values.clone());
        let viewport = Viewport::new(450.0, 450.0);
        let config = ChartEngineConfig::default();

        let frame = build_render_frame(&dataset, viewport, config).expect("frame");
        let metrics = PlotMetrics::new(viewport, config.outer_padding, config.grid_margin)
            .expect("metrics");
        let slots = layout_x_slots(values.len(), &metrics);
        let slot_width = metrics.plot_width / values.len() as f64;

        let rects: Vec<_> = frame
            .instructions
            .iter()
            .filter_map(|i| match i {
                barchart_rs::render::DrawInstruction::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect();
        prop_assert_eq!(rects.len(), slots.len());

        // Rects are emitted in reverse slot order.
        for (rect, slot) in rects.iter().zip(slots.iter().rev()) {
            prop_assert!(rect.x >= slot.line_x - 1e-9);
            prop_assert!(rect.x + rect.width <= slot.line_x + slot_width + 1e-9);
        }
    }
}
