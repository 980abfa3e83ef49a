use approx::assert_relative_eq;
use barchart_rs::core::{
    PlotMetrics, StepScale, ValueInterval, Viewport, layout_x_slots, layout_y_gridlines,
};
use barchart_rs::error::ChartError;

fn metrics() -> PlotMetrics {
    PlotMetrics::new(Viewport::new(450.0, 450.0), 50.0, 10.0).expect("metrics")
}

#[test]
fn metrics_derive_plot_extents_and_anchors() {
    let metrics = metrics();
    assert_eq!(metrics.plot_width, 400.0);
    assert_eq!(metrics.plot_height, 400.0);
    assert_eq!(metrics.baseline_y, 425.0);
    assert_eq!(metrics.right_x, 440.0);
}

#[test]
fn metrics_reject_padding_that_swallows_the_viewport() {
    let err = PlotMetrics::new(Viewport::new(40.0, 450.0), 50.0, 10.0)
        .expect_err("no drawing area left");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn metrics_reject_invalid_viewport() {
    let err = PlotMetrics::new(Viewport::new(0.0, 450.0), 50.0, 10.0).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn slots_partition_the_plot_from_the_right_edge_inward() {
    let slots = layout_x_slots(4, &metrics());
    assert_eq!(slots.len(), 4);

    // Slot width is 400 / 4 = 100; the last slot touches the right anchor.
    assert_eq!(slots[3].line_x, 340.0);
    assert_eq!(slots[2].line_x, 240.0);
    assert_eq!(slots[1].line_x, 140.0);
    assert_eq!(slots[0].line_x, 40.0);
}

#[test]
fn slot_labels_and_bars_are_inset_by_the_grid_margin() {
    let slots = layout_x_slots(4, &metrics());
    for slot in &slots {
        assert_eq!(slot.label_x, slot.line_x + 10.0);
        assert_eq!(slot.bar_left, slot.line_x + 10.0);
        assert_eq!(slot.bar_width, 80.0);
    }
}

#[test]
fn uneven_slot_widths_stay_exact_per_index() {
    let slots = layout_x_slots(3, &metrics());
    let slot_width = 400.0 / 3.0;
    for (index, slot) in slots.iter().enumerate() {
        let expected = 440.0 - (3 - index) as f64 * slot_width;
        assert_relative_eq!(slot.line_x, expected, epsilon = 1e-9);
        assert_relative_eq!(slot.bar_width, slot_width - 20.0, epsilon = 1e-9);
    }
}

#[test]
fn zero_labels_produce_no_slots() {
    assert!(layout_x_slots(0, &metrics()).is_empty());
}

#[test]
fn gridlines_step_from_the_baseline_upward() {
    let interval = ValueInterval {
        min: 0.0,
        max: 100.0,
    };
    let scale = StepScale::from_interval(interval, 400.0).expect("scale");
    let gridlines = layout_y_gridlines(interval, scale, &metrics());

    assert_eq!(gridlines.len(), 11);
    assert_eq!(gridlines[0].y, 425.0);
    assert_eq!(gridlines[0].value, 0.0);
    assert_eq!(gridlines[10].y, 25.0);
    assert_eq!(gridlines[10].value, 100.0);
}

#[test]
fn gridline_values_start_at_the_interval_minimum() {
    let interval = ValueInterval {
        min: -10.0,
        max: 10.0,
    };
    let scale = StepScale::from_interval(interval, 400.0).expect("scale");
    let gridlines = layout_y_gridlines(interval, scale, &metrics());

    assert_eq!(gridlines[0].value, -10.0);
    let midpoint = &gridlines[scale.step_count / 2];
    assert_eq!(midpoint.value, 0.0);
    assert_eq!(midpoint.y, 225.0);
}
