use serde::{Deserialize, Serialize};

use crate::core::{CartesianLayout, Series};

/// One vertical bar in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub category_index: usize,
    pub center_x: f64,
    pub base_y: f64,
    pub top_y: f64,
    pub width: f64,
}

/// Projects one series into bars.
///
/// Bars of series `series_index` sit `bar_width * (series_index + 1)` left of
/// the right edge of each category slot, so the series of one category line
/// up side by side without overlapping.
#[must_use]
pub fn project_bars(
    series: &Series,
    series_index: usize,
    series_count: usize,
    layout: &CartesianLayout,
) -> Vec<BarGeometry> {
    let width = layout.bar_width(series_count);
    let offset = width * (series_index + 1) as f64;
    let base_y = layout.baseline_y();

    series
        .values()
        .enumerate()
        .map(|(category_index, value)| BarGeometry {
            category_index,
            center_x: layout.category_x((category_index + 1) as f64) - offset,
            base_y,
            top_y: layout.value_to_pixel_y(value),
            width,
        })
        .collect()
}
