use approx::assert_abs_diff_eq;
use chart_views::ChartError;
use chart_views::core::{
    CartesianLayout, DonutLayout, LinearScale, ValueAxis, Viewport, format_number,
};

#[test]
fn cartesian_layout_uses_ten_and_twenty_percent_margins() {
    let layout = CartesianLayout::compute(Viewport::new(100, 100), 4, Some(47.0), 10)
        .expect("layout");

    assert_abs_diff_eq!(layout.margins.left, 10.0);
    assert_abs_diff_eq!(layout.margins.top, 20.0);
    assert_abs_diff_eq!(layout.x_axis_length, 80.0);
    assert_abs_diff_eq!(layout.y_axis_length, 60.0);
    assert_abs_diff_eq!(layout.x_divisor_length, 20.0);
    assert_abs_diff_eq!(layout.y_divisor_length, layout.y_axis_length / 10.0);
    assert_abs_diff_eq!(layout.baseline_y(), 80.0);
    assert_abs_diff_eq!(layout.right_x(), 90.0);
}

#[test]
fn value_axis_is_quantized_to_grid_steps() {
    let layout = CartesianLayout::compute(Viewport::new(100, 100), 4, Some(47.0), 10)
        .expect("layout");

    assert_abs_diff_eq!(layout.value_axis.step, 5.0);
    assert_abs_diff_eq!(layout.value_axis.max_value, 50.0);
    assert_abs_diff_eq!(layout.pixels_per_unit(), layout.y_axis_length / 50.0);
    assert!(layout.value_axis.max_value >= 47.0);
}

#[test]
fn values_map_from_baseline_upwards() {
    let layout = CartesianLayout::compute(Viewport::new(200, 100), 4, Some(47.0), 10)
        .expect("layout");

    assert_abs_diff_eq!(layout.value_to_pixel_y(0.0), 80.0);
    assert_abs_diff_eq!(layout.value_to_pixel_y(10.0), 68.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.value_to_pixel_y(50.0), 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.gridline_y(0), 20.0);
    assert_abs_diff_eq!(layout.gridline_y(9), 74.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.category_x(1.0), 60.0);
}

#[test]
fn bar_width_is_capped_at_half_a_slot() {
    let layout = CartesianLayout::compute(Viewport::new(200, 100), 4, Some(47.0), 10)
        .expect("layout");

    assert_abs_diff_eq!(layout.bar_width(1), 20.0);
    assert_abs_diff_eq!(layout.bar_width(2), 16.0);
    assert_abs_diff_eq!(layout.bar_width(4), 8.0);
}

#[test]
fn zero_maximum_renders_flat() {
    let layout = CartesianLayout::compute(Viewport::new(100, 100), 3, Some(0.0), 10)
        .expect("layout");

    assert!(layout.value_axis.is_degenerate());
    assert_eq!(layout.pixels_per_unit(), 0.0);
    assert_eq!(layout.value_to_pixel_y(0.0), layout.baseline_y());
    assert_eq!(layout.value_axis.gridline_value(0), 0.0);
}

#[test]
fn empty_categories_have_zero_slot_width() {
    let layout =
        CartesianLayout::compute(Viewport::new(100, 100), 0, None, 10).expect("layout");
    assert_eq!(layout.x_divisor_length, 0.0);
    assert!(layout.value_axis.is_degenerate());
}

#[test]
fn invalid_viewport_is_rejected() {
    let err = CartesianLayout::compute(Viewport::new(0, 100), 2, Some(1.0), 10)
        .expect_err("must reject");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 100
        }
    ));
    assert!(DonutLayout::compute(Viewport::new(100, 0), 2).is_err());
}

#[test]
fn grid_line_count_drives_divisor_and_step() {
    let layout = CartesianLayout::compute(Viewport::new(100, 100), 2, Some(100.0), 4)
        .expect("layout");
    assert_abs_diff_eq!(layout.y_divisor_length, 15.0);
    assert_abs_diff_eq!(layout.value_axis.step, 25.0);
    assert_eq!(layout.value_axis, ValueAxis::quantized(Some(100.0), 4).expect("axis"));
}

#[test]
fn donut_layout_fits_rings_in_shorter_side() {
    let layout = DonutLayout::compute(Viewport::new(200, 100), 2).expect("layout");

    assert_abs_diff_eq!(layout.margins.top, 5.0);
    assert_abs_diff_eq!(layout.margins.left, 0.0);
    assert_abs_diff_eq!(layout.total_radius, 45.0);
    assert_abs_diff_eq!(layout.ring_width, 15.0);
    assert_abs_diff_eq!(layout.center.x, 100.0);
    assert_abs_diff_eq!(layout.center.y, 50.0);
    assert_abs_diff_eq!(layout.ring_radius(0), 15.0);
    assert_abs_diff_eq!(layout.ring_radius(1), 30.0);
}

#[test]
fn linear_scale_supports_descending_ranges() {
    let scale = LinearScale::new(0.0, 50.0, 80.0, 20.0).expect("scale");
    assert_abs_diff_eq!(scale.pixels_per_unit(), -1.2, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.domain_to_pixel(25.0), 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.pixel_to_domain(50.0), 25.0, epsilon = 1e-12);
}

#[test]
fn linear_scale_rejects_empty_domain_or_range() {
    assert!(LinearScale::new(1.0, 1.0, 0.0, 10.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 5.0, 5.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 10.0).is_err());
}

#[test]
fn small_maximum_labels_stay_exact() {
    let layout = CartesianLayout::compute(Viewport::new(100, 100), 2, Some(4.0), 10)
        .expect("layout");
    let labels: Vec<String> = (0..10)
        .map(|index| format_number(layout.value_axis.gridline_value(index)))
        .collect();

    assert_eq!(labels[0], "4.0");
    assert_eq!(labels[3], "2.8");
    assert_eq!(labels[4], "2.4");
    assert_eq!(labels[7], "1.2");
    assert_eq!(labels[9], "0.4");
}
