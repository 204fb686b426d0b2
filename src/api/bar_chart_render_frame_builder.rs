use tracing::trace;

use crate::core::{CartesianLayout, ChartData, RenderState, Viewport, project_bars};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, Palette, RenderFrame, TextHAlign, TextPrimitive};

use super::cartesian_frame_builder::{
    append_axes, append_axis_titles, append_value_gridlines, legend_row_y,
};
use super::legend_builder::append_legend;
use super::{ChartRenderer, ChartSettings};

/// Grouped vertical bars, one bar per series inside every category slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarChart;

impl ChartRenderer for BarChart {
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
            ChartError::InvalidData("bar chart requires a cartesian layout".to_owned())
        })?;
        let mut frame = RenderFrame::new(layout.viewport);

        append_axes(&mut frame, layout, settings);
        append_category_labels(&mut frame, data, layout, settings);
        append_value_gridlines(&mut frame, layout, settings);

        for (series_index, series) in data.series().iter().enumerate() {
            let color = palette.color_for_series(series_index);
            for bar in project_bars(series, series_index, data.series_count(), layout) {
                frame.push(LinePrimitive::new(
                    bar.center_x,
                    bar.base_y,
                    bar.center_x,
                    bar.top_y,
                    bar.width,
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

        trace!(primitives = frame.len(), "bar chart frame built");
        Ok(frame)
    }
}

/// Category labels centred in their slots along the baseline.
fn append_category_labels(
    frame: &mut RenderFrame,
    data: &ChartData,
    layout: &CartesianLayout,
    settings: &ChartSettings,
) {
    if !settings.show_axis_labels {
        return;
    }
    let style = settings.style;

    for (index, label) in data.category_labels().iter().enumerate() {
        let text = label.canonical_string();
        if text.is_empty() {
            continue;
        }
        frame.push(TextPrimitive::new(
            text,
            layout.category_x(index as f64 + 0.5),
            layout.baseline_y(),
            style.axis_label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }
}
