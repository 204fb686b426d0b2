use serde::{Deserialize, Serialize};

use crate::core::{CartesianLayout, Point, Series};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects one series into a polyline starting at the plot origin.
///
/// Category `i` is plotted at the right edge of its slot. The function is
/// deterministic and side-effect free so both rendering and tests consume the
/// exact same geometry.
#[must_use]
pub fn project_line_segments(series: &Series, layout: &CartesianLayout) -> Vec<LineSegment> {
    let origin = Point::new(layout.margins.left, layout.baseline_y());
    let mut mapped = Vec::with_capacity(series.vertical().len() + 1);
    mapped.push(origin);
    for (index, value) in series.values().enumerate() {
        mapped.push(Point::new(
            layout.category_x((index + 1) as f64),
            layout.value_to_pixel_y(value),
        ));
    }

    mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
