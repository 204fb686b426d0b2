use tracing::debug;

use crate::core::{ChartData, RenderState, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, Palette, RenderFrame, Renderer, entropy_seed};

use super::{ChartKind, ChartRenderer, ChartSettings};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Output of one full layout and render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub state: RenderState,
    pub frame: RenderFrame,
    /// Series colors resolved during the pass, caller presets first.
    pub colors: Vec<Color>,
}

/// One chart view: validated data, settings and a rendering backend.
///
/// Every pass recomputes geometry and rebuilds the palette from the caller
/// presets and the view's color seed, so repeated layout and draw passes for
/// the same viewport yield identical frames.
pub struct ChartView<R: Renderer> {
    renderer: R,
    kind: ChartKind,
    data: ChartData,
    settings: ChartSettings,
    color_seed: u64,
}

impl<R: Renderer> ChartView<R> {
    /// Validates `json` and builds a view. Nothing is constructed when the
    /// payload or the settings are rejected.
    pub fn from_json(
        renderer: R,
        kind: ChartKind,
        json: &[u8],
        settings: ChartSettings,
    ) -> ChartResult<Self> {
        let data = ChartData::from_json_slice(json)?;
        Self::new(renderer, kind, data, settings)
    }

    pub fn new(
        renderer: R,
        kind: ChartKind,
        data: ChartData,
        settings: ChartSettings,
    ) -> ChartResult<Self> {
        settings.validate()?;
        let color_seed = settings.color_seed.unwrap_or_else(entropy_seed);
        debug!(
            kind = kind.name(),
            series = data.series_count(),
            categories = data.category_count(),
            "chart view created"
        );

        Ok(Self {
            renderer,
            kind,
            data,
            settings,
            color_seed,
        })
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    #[must_use]
    pub fn color_seed(&self) -> u64 {
        self.color_seed
    }

    /// Replaces the chart data with a new payload.
    ///
    /// The current data is kept when the payload is rejected.
    pub fn set_json(&mut self, json: &[u8]) -> ChartResult<()> {
        self.data = ChartData::from_json_slice(json)?;
        debug!(
            kind = self.kind.name(),
            series = self.data.series_count(),
            "chart view data replaced"
        );
        Ok(())
    }

    pub fn set_settings(&mut self, settings: ChartSettings) -> ChartResult<()> {
        settings.validate()?;
        if let Some(seed) = settings.color_seed {
            self.color_seed = seed;
        }
        self.settings = settings;
        Ok(())
    }

    pub fn layout(&self, viewport: Viewport) -> ChartResult<RenderState> {
        self.kind.layout(&self.data, viewport, &self.settings)
    }

    pub fn render_pass(&self, viewport: Viewport) -> ChartResult<RenderPass> {
        let state = self.layout(viewport)?;
        let mut palette = Palette::seeded(self.settings.colors.clone(), self.color_seed);
        let frame = self
            .kind
            .render(&self.data, &state, &self.settings, &mut palette)?;

        Ok(RenderPass {
            state,
            frame,
            colors: palette.colors().to_vec(),
        })
    }

    pub fn build_render_frame(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        self.render_pass(viewport).map(|pass| pass.frame)
    }

    /// Builds a frame for `viewport` and hands it to the backend.
    pub fn render(&mut self, viewport: Viewport) -> ChartResult<()> {
        let frame = self.build_render_frame(viewport)?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        viewport: Viewport,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame(viewport)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
