use tracing::trace;

use crate::core::{ChartData, DonutLayout, RenderState, Viewport, project_donut_rings};
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, Palette, RenderFrame, segment_shade};

use super::legend_builder::append_legend;
use super::{ChartRenderer, ChartSettings};

/// Concentric rings, one per series, split into per-category arcs.
///
/// Only the legend and color settings apply; donuts have no axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DonutChart;

impl ChartRenderer for DonutChart {
    fn layout(
        &self,
        data: &ChartData,
        viewport: Viewport,
        _settings: &ChartSettings,
    ) -> ChartResult<RenderState> {
        DonutLayout::compute(viewport, data.series_count()).map(RenderState::Donut)
    }

    fn render(
        &self,
        data: &ChartData,
        state: &RenderState,
        settings: &ChartSettings,
        palette: &mut Palette,
    ) -> ChartResult<RenderFrame> {
        let layout = state.as_donut().ok_or_else(|| {
            ChartError::InvalidData("donut chart requires a donut layout".to_owned())
        })?;
        let mut frame = RenderFrame::new(layout.viewport);

        let rings = project_donut_rings(data, layout);
        for ring in &rings {
            let base = palette.color_for_series(ring.ring_index);
            for segment in &ring.segments {
                frame.push(ArcPrimitive::new(
                    layout.center,
                    ring.radius,
                    segment.start_angle,
                    segment.end_angle,
                    layout.ring_width,
                    segment_shade(base, segment.category_index),
                ));
            }
        }

        let style = settings.style;
        let row_y = layout.viewport.height_px() - style.legend_box_size_px / 2.0 - 10.0;
        append_legend(
            &mut frame,
            layout.viewport,
            row_y,
            palette.colors(),
            |index| {
                rings
                    .get(index)
                    .and_then(|ring| data.series().get(ring.series_index))
                    .and_then(|series| series.title())
            },
            settings,
        );

        trace!(
            rings = rings.len(),
            primitives = frame.len(),
            "donut chart frame built"
        );
        Ok(frame)
    }
}
