use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{LinearScale, Point, Viewport};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_GRID_LINE_COUNT: usize = 10;
/// Left/right margin of bar and line charts as a share of surface width.
pub const CARTESIAN_WIDTH_MARGIN_RATIO: f64 = 0.1;
/// Top/bottom margin of bar and line charts as a share of surface height.
pub const CARTESIAN_HEIGHT_MARGIN_RATIO: f64 = 0.2;
pub const DONUT_HEIGHT_MARGIN_RATIO: f64 = 0.05;
/// Angular gap inserted before each donut ring.
pub const DONUT_RING_GAP_RADIANS: f64 = 10.0 * PI / 180.0;

const BAR_GROUP_FILL_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
}

/// Quantized value axis: `grid_line_count` evenly labelled steps from zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub grid_line_count: usize,
    pub step: f64,
    pub max_value: f64,
}

impl ValueAxis {
    /// Quantizes the axis ceiling to `round(max / count) * count`, rounding
    /// the step up instead when rounding would leave the maximum above the top
    /// gridline.
    ///
    /// A data maximum that is absent, non-finite or not positive yields a
    /// degenerate zero axis. A positive maximum whose rounded step collapses
    /// to zero keeps the exact `max / count` step instead.
    pub fn quantized(max_of_all: Option<f64>, grid_line_count: usize) -> ChartResult<Self> {
        if grid_line_count == 0 {
            return Err(ChartError::InvalidData(
                "grid line count must be >= 1".to_owned(),
            ));
        }

        let count = grid_line_count as f64;
        let (step, max_value) = match max_of_all {
            Some(max) if max.is_finite() && max > 0.0 => {
                let exact = max / count;
                let rounded = exact.round();
                if rounded <= 0.0 {
                    (exact, max)
                } else if rounded * count < max {
                    (exact.ceil(), exact.ceil() * count)
                } else {
                    (rounded, rounded * count)
                }
            }
            other => {
                warn!(max = ?other, "value axis degenerates to zero height");
                (0.0, 0.0)
            }
        };

        Ok(Self {
            grid_line_count,
            step,
            max_value,
        })
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max_value <= 0.0
    }

    /// Label value of gridline `index`, counted from the top of the plot.
    #[must_use]
    pub fn gridline_value(self, index: usize) -> f64 {
        let remaining = self.grid_line_count.saturating_sub(index) as f64;
        self.max_value * remaining / self.grid_line_count as f64
    }
}

/// Shared geometry of bar and line charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub x_axis_length: f64,
    pub y_axis_length: f64,
    pub category_count: usize,
    /// Pixel width of one category slot.
    pub x_divisor_length: f64,
    /// Pixel distance between two gridlines.
    pub y_divisor_length: f64,
    pub value_axis: ValueAxis,
    value_scale: Option<LinearScale>,
}

impl CartesianLayout {
    pub fn compute(
        viewport: Viewport,
        category_count: usize,
        max_of_all: Option<f64>,
        grid_line_count: usize,
    ) -> ChartResult<Self> {
        ensure_viewport(viewport)?;

        let width = viewport.width_px();
        let height = viewport.height_px();
        let margins = Margins {
            left: width * CARTESIAN_WIDTH_MARGIN_RATIO,
            top: height * CARTESIAN_HEIGHT_MARGIN_RATIO,
        };
        let x_axis_length = width - margins.left * 2.0;
        let y_axis_length = height - margins.top * 2.0;

        let x_divisor_length = if category_count == 0 {
            0.0
        } else {
            x_axis_length / category_count as f64
        };

        let value_axis = ValueAxis::quantized(max_of_all, grid_line_count)?;
        let y_divisor_length = y_axis_length / grid_line_count as f64;
        let baseline = margins.top + y_axis_length;
        let value_scale = if value_axis.is_degenerate() {
            None
        } else {
            Some(LinearScale::new(
                0.0,
                value_axis.max_value,
                baseline,
                margins.top,
            )?)
        };

        trace!(
            x_axis_length,
            y_axis_length,
            x_divisor_length,
            y_divisor_length,
            axis_max = value_axis.max_value,
            "cartesian layout computed"
        );

        Ok(Self {
            viewport,
            margins,
            x_axis_length,
            y_axis_length,
            category_count,
            x_divisor_length,
            y_divisor_length,
            value_axis,
            value_scale,
        })
    }

    /// Y coordinate of the category axis.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.margins.top + self.y_axis_length
    }

    #[must_use]
    pub fn right_x(&self) -> f64 {
        self.margins.left + self.x_axis_length
    }

    /// Vertical pixels per value unit; zero on a degenerate axis.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.value_scale
            .map_or(0.0, |scale| scale.pixels_per_unit().abs())
    }

    /// Maps a value onto the plot; a degenerate axis pins every value to the
    /// baseline.
    #[must_use]
    pub fn value_to_pixel_y(&self, value: f64) -> f64 {
        match self.value_scale {
            Some(scale) => scale.domain_to_pixel(value),
            None => self.baseline_y(),
        }
    }

    /// X coordinate at `slots` category widths right of the y-axis.
    #[must_use]
    pub fn category_x(&self, slots: f64) -> f64 {
        self.margins.left + self.x_divisor_length * slots
    }

    /// Y coordinate of gridline `index`, counted from the top of the plot.
    #[must_use]
    pub fn gridline_y(&self, index: usize) -> f64 {
        self.margins.top + self.y_divisor_length * index as f64
    }

    /// Width of one bar when `series_count` bars share a category slot.
    #[must_use]
    pub fn bar_width(&self, series_count: usize) -> f64 {
        let available = self.x_divisor_length * BAR_GROUP_FILL_RATIO;
        let per_series = available / series_count.max(1) as f64;
        per_series.min(self.x_divisor_length / 2.0)
    }
}

/// Concentric-ring geometry of donut charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub center: Point,
    pub total_radius: f64,
    /// Radial thickness of one ring.
    pub ring_width: f64,
    pub series_count: usize,
}

impl DonutLayout {
    pub fn compute(viewport: Viewport, series_count: usize) -> ChartResult<Self> {
        ensure_viewport(viewport)?;

        let width = viewport.width_px();
        let height = viewport.height_px();
        let margins = Margins {
            left: 0.0,
            top: height * DONUT_HEIGHT_MARGIN_RATIO,
        };
        let render_area = (width - margins.left * 2.0).min(height - margins.top * 2.0);
        let total_radius = render_area / 2.0;
        let ring_width = total_radius / (series_count + 1) as f64;

        Ok(Self {
            viewport,
            margins,
            center: Point::new(width / 2.0, height / 2.0),
            total_radius,
            ring_width,
            series_count,
        })
    }

    /// Radius of the `ring_index`-th drawn ring, innermost first.
    #[must_use]
    pub fn ring_radius(&self, ring_index: usize) -> f64 {
        self.ring_width * (ring_index + 1) as f64
    }
}

/// Per-pass geometry recomputed in full by every layout call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderState {
    Cartesian(CartesianLayout),
    Donut(DonutLayout),
}

impl RenderState {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        match self {
            Self::Cartesian(layout) => layout.viewport,
            Self::Donut(layout) => layout.viewport,
        }
    }

    #[must_use]
    pub fn as_cartesian(&self) -> Option<&CartesianLayout> {
        match self {
            Self::Cartesian(layout) => Some(layout),
            Self::Donut(_) => None,
        }
    }

    #[must_use]
    pub fn as_donut(&self) -> Option<&DonutLayout> {
        match self {
            Self::Donut(layout) => Some(layout),
            Self::Cartesian(_) => None,
        }
    }
}

fn ensure_viewport(viewport: Viewport) -> ChartResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantized_axis_rounds_step() {
        let axis = ValueAxis::quantized(Some(47.0), 10).expect("axis");
        assert_eq!(axis.step, 5.0);
        assert_eq!(axis.max_value, 50.0);
        assert_eq!(axis.gridline_value(0), 50.0);
        assert_eq!(axis.gridline_value(9), 5.0);
    }

    #[test]
    fn step_rounds_up_when_rounding_would_clip_the_maximum() {
        let axis = ValueAxis::quantized(Some(44.0), 10).expect("axis");
        assert_eq!(axis.step, 5.0);
        assert_eq!(axis.max_value, 50.0);
    }

    #[test]
    fn small_maximum_keeps_exact_step() {
        let axis = ValueAxis::quantized(Some(4.0), 10).expect("axis");
        assert!((axis.step - 0.4).abs() <= 1e-12);
        assert!((axis.max_value - 4.0).abs() <= 1e-12);
    }

    #[test]
    fn exact_step_labels_carry_no_float_noise() {
        let axis = ValueAxis::quantized(Some(4.0), 10).expect("axis");
        assert_eq!(axis.max_value, 4.0);
        assert_eq!(axis.gridline_value(3), 2.8);
        assert_eq!(axis.gridline_value(4), 2.4);
        assert_eq!(axis.gridline_value(7), 1.2);
    }

    #[test]
    fn zero_maximum_degenerates() {
        let axis = ValueAxis::quantized(Some(0.0), 10).expect("axis");
        assert!(axis.is_degenerate());
        assert_eq!(axis.step, 0.0);
    }

    #[test]
    fn zero_grid_lines_are_rejected() {
        assert!(ValueAxis::quantized(Some(10.0), 0).is_err());
    }
}
