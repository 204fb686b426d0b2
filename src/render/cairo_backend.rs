use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, DrawPrimitive, LinePrimitive, LineStrokeStyle, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

const LABEL_FONT_FAMILY: &str = "Sans";

/// Primitive counts painted by the last successful pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub arcs_drawn: usize,
    pub texts_drawn: usize,
}

impl CairoRenderStats {
    fn record(&mut self, primitive: &DrawPrimitive) {
        match primitive {
            DrawPrimitive::Line(_) => self.lines_drawn += 1,
            DrawPrimitive::Arc(_) => self.arcs_drawn += 1,
            DrawPrimitive::Text(_) => self.texts_drawn += 1,
        }
    }
}

/// Renderers able to paint into a context owned by the host, e.g. inside a
/// toolkit draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo/Pango backend painting chart frames.
///
/// `Renderer::render` paints into an owned ARGB image surface (see
/// [`CairoRenderer::surface`] for PNG export); [`CairoContextRenderer`] paints
/// into an external context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn paint_frame(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for primitive in &frame.primitives {
            match primitive {
                DrawPrimitive::Line(line) => stroke_line(context, line)?,
                DrawPrimitive::Arc(arc) => stroke_arc(context, arc)?,
                DrawPrimitive::Text(text) => show_text(context, text),
            }
            stats.record(primitive);
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.paint_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint_frame(context, frame)
    }
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    if let LineStrokeStyle::Dashed { on_px, off_px } = line.stroke_style {
        context.set_dash(&[on_px, off_px], 0.0);
    }

    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let stroked = context
        .stroke()
        .map_err(|err| backend_error("failed to stroke line", err));
    context.set_dash(&[], 0.0);
    stroked
}

fn stroke_arc(context: &Context, arc: &ArcPrimitive) -> ChartResult<()> {
    set_source(context, arc.color);
    context.set_line_width(arc.stroke_width);
    context.new_path();

    let (x, y) = (arc.center.x, arc.center.y);
    if arc.sweep() >= 0.0 {
        context.arc(x, y, arc.radius, arc.start_angle, arc.end_angle);
    } else {
        context.arc_negative(x, y, arc.radius, arc.start_angle, arc.end_angle);
    }
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke arc", err))
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!(
        "{LABEL_FONT_FAMILY} {}",
        text.font_size_px
    ));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let width = f64::from(layout.pixel_size().0);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };

    set_source(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
