use serde::{Deserialize, Serialize};

use crate::core::{ChartData, RenderState, Viewport};
use crate::error::ChartResult;
use crate::render::{Palette, RenderFrame};

use super::{BarChart, ChartSettings, DonutChart, LineChart};

/// Capability shared by every chart kind.
///
/// `layout` derives the per-pass geometry from scratch; `render` turns data
/// and geometry into an ordered primitive list, assigning series colors
/// through the palette it is handed.
pub trait ChartRenderer {
    fn layout(
        &self,
        data: &ChartData,
        viewport: Viewport,
        settings: &ChartSettings,
    ) -> ChartResult<RenderState>;

    fn render(
        &self,
        data: &ChartData,
        state: &RenderState,
        settings: &ChartSettings,
        palette: &mut Palette,
    ) -> ChartResult<RenderFrame>;
}

/// Chart variants available to views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Donut,
}

impl ChartKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Donut => "donut",
        }
    }

    fn renderer(self) -> &'static dyn ChartRenderer {
        match self {
            Self::Bar => &BarChart,
            Self::Line => &LineChart,
            Self::Donut => &DonutChart,
        }
    }
}

impl ChartRenderer for ChartKind {
    fn layout(
        &self,
        data: &ChartData,
        viewport: Viewport,
        settings: &ChartSettings,
    ) -> ChartResult<RenderState> {
        self.renderer().layout(data, viewport, settings)
    }

    fn render(
        &self,
        data: &ChartData,
        state: &RenderState,
        settings: &ChartSettings,
        palette: &mut Palette,
    ) -> ChartResult<RenderFrame> {
        self.renderer().render(data, state, settings, palette)
    }
}
