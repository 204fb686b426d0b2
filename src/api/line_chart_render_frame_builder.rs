use tracing::trace;

use crate::core::{CartesianLayout, ChartData, RenderState, Viewport, project_line_segments};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, Palette, RenderFrame, TextHAlign, TextPrimitive};

use super::cartesian_frame_builder::{
    append_axes, append_axis_titles, append_value_gridlines, legend_row_y,
};
use super::legend_builder::append_legend;
use super::{ChartRenderer, ChartSettings};

/// One polyline per series, starting at the plot origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineChart;

impl ChartRenderer for LineChart {
    fn layout(
        &self,
        data: &ChartData,
        viewport: Viewport,
        settings: &ChartSettings,
    ) -> ChartResult<RenderState> {
        CartesianLayout::compute(
            viewport,
            data.category_count(),
            data.max_vertical_value(),
            settings.grid_line_count,
        )
        .map(RenderState::Cartesian)
    }

    fn render(
        &self,
        data: &ChartData,
        state: &RenderState,
        settings: &ChartSettings,
        palette: &mut Palette,
    ) -> ChartResult<RenderFrame> {
        let layout = state.as_cartesian().ok_or_else(|| {
            ChartError::InvalidData("line chart requires a cartesian layout".to_owned())
        })?;
        let mut frame = RenderFrame::new(layout.viewport);

        append_axes(&mut frame, layout, settings);
        append_category_gridlines(&mut frame, data, layout, settings);
        append_value_gridlines(&mut frame, layout, settings);

        let stroke_width = settings.style.series_line_width;
        for (series_index, series) in data.series().iter().enumerate() {
            let color = palette.color_for_series(series_index);
            for segment in project_line_segments(series, layout) {
                frame.push(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    stroke_width,
                    color,
                ));
            }
        }

        append_axis_titles(&mut frame, data, layout, settings);
        append_legend(
            &mut frame,
            layout.viewport,
            legend_row_y(layout, settings),
            palette.colors(),
            |index| data.series().get(index).and_then(|series| series.title()),
            settings,
        );

        trace!(primitives = frame.len(), "line chart frame built");
        Ok(frame)
    }
}

/// Dashed vertical gridline at the right edge of every category slot, with
/// the category label starting at the same x.
fn append_category_gridlines(
    frame: &mut RenderFrame,
    data: &ChartData,
    layout: &CartesianLayout,
    settings: &ChartSettings,
) {
    let style = settings.style;

    for (index, label) in data.category_labels().iter().enumerate() {
        let x = layout.category_x((index + 1) as f64);
        if settings.show_grid {
            frame.push(
                LinePrimitive::new(
                    x,
                    layout.margins.top,
                    x,
                    layout.baseline_y(),
                    style.grid_line_width,
                    style.grid_line_color,
                )
                .with_stroke_style(style.grid_line_style),
            );
        }

        let text = label.canonical_string();
        if settings.show_axis_labels && !text.is_empty() {
            frame.push(TextPrimitive::new(
                text,
                x,
                layout.baseline_y(),
                style.axis_label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
        }
    }
}
