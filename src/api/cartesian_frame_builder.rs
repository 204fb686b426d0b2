use crate::core::{CartesianLayout, ChartData, format_number};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartSettings;

/// Emits the y-axis and the category axis.
pub(super) fn append_axes(frame: &mut RenderFrame, layout: &CartesianLayout, settings: &ChartSettings) {
    let style = settings.style;
    let left = layout.margins.left;
    let top = layout.margins.top;
    let baseline = layout.baseline_y();

    frame.push(LinePrimitive::new(
        left,
        top,
        left,
        baseline,
        style.axis_line_width,
        style.axis_color,
    ));
    frame.push(LinePrimitive::new(
        left,
        baseline,
        layout.right_x(),
        baseline,
        style.axis_line_width,
        style.axis_color,
    ));
}

/// Emits dashed horizontal gridlines and their value labels, top to bottom.
pub(super) fn append_value_gridlines(
    frame: &mut RenderFrame,
    layout: &CartesianLayout,
    settings: &ChartSettings,
) {
    let style = settings.style;
    let axis = layout.value_axis;

    for index in 0..axis.grid_line_count {
        let y = layout.gridline_y(index);
        if settings.show_grid {
            frame.push(
                LinePrimitive::new(
                    layout.margins.left,
                    y,
                    layout.right_x(),
                    y,
                    style.grid_line_width,
                    style.grid_line_color,
                )
                .with_stroke_style(style.grid_line_style),
            );
        }

        if settings.show_axis_labels {
            frame.push(TextPrimitive::new(
                format_number(axis.gridline_value(index)),
                layout.margins.left - style.label_padding_px,
                y,
                style.axis_label_font_size_px,
                style.label_color,
                TextHAlign::Right,
            ));
        }
    }
}

/// Emits the category-axis title below the labels and the value-axis title
/// above the y-axis. Absent titles are skipped.
pub(super) fn append_axis_titles(
    frame: &mut RenderFrame,
    data: &ChartData,
    layout: &CartesianLayout,
    settings: &ChartSettings,
) {
    if !settings.show_axis_titles {
        return;
    }
    let style = settings.style;

    if let Some(title) = data.horizontal_title().filter(|title| !title.is_empty()) {
        frame.push(TextPrimitive::new(
            title,
            layout.margins.left + layout.x_axis_length / 2.0,
            layout.baseline_y() + style.axis_label_font_size_px + style.label_padding_px,
            style.axis_title_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    if let Some(title) = data.vertical_title().filter(|title| !title.is_empty()) {
        frame.push(TextPrimitive::new(
            title,
            layout.margins.left,
            layout.margins.top - style.axis_title_font_size_px - style.label_padding_px,
            style.axis_title_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }
}

/// Y coordinate of the legend row under a cartesian plot.
pub(super) fn legend_row_y(layout: &CartesianLayout, settings: &ChartSettings) -> f64 {
    let style = settings.style;
    layout.baseline_y()
        + style.axis_label_font_size_px
        + style.axis_title_font_size_px
        + style.legend_box_size_px / 2.0
        + style.label_padding_px
}
