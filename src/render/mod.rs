mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{
    ColorSource, Palette, SeededRng, entropy_seed, random_color, segment_shade,
};
pub use primitives::{
    ArcPrimitive, Color, DrawPrimitive, LinePrimitive, LineStrokeStyle, TextHAlign,
    TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart data and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
