use serde::{Deserialize, Serialize};

use crate::render::{Color, LineStrokeStyle};

/// Visual constants applied by every chart kind.
///
/// Sizes are in pixels. Donut charts only read the legend fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub grid_line_color: Color,
    /// Color of category, gridline, title and legend labels.
    pub label_color: Color,
    pub axis_line_width: f64,
    pub grid_line_width: f64,
    pub series_line_width: f64,
    pub grid_line_style: LineStrokeStyle,
    pub axis_label_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub legend_label_font_size_px: f64,
    pub legend_box_size_px: f64,
    /// Gap between a label and the element it annotates.
    pub label_padding_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            grid_line_color: Color::rgb(0.667, 0.667, 0.667),
            label_color: Color::rgb(0.255, 0.275, 0.302),
            axis_line_width: 2.0,
            grid_line_width: 1.0,
            series_line_width: 1.0,
            grid_line_style: LineStrokeStyle::Dashed {
                on_px: 7.0,
                off_px: 4.0,
            },
            axis_label_font_size_px: 10.0,
            axis_title_font_size_px: 10.0,
            legend_label_font_size_px: 10.0,
            legend_box_size_px: 20.0,
            label_padding_px: 5.0,
        }
    }
}
