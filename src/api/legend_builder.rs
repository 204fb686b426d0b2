use tracing::warn;

use crate::core::Viewport;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartSettings;

const LEGEND_WIDTH_RATIO: f64 = 0.9;

/// Emits one swatch and label per palette color.
///
/// Entries share `0.9 * width` evenly and start at `0.1 * width`. Colors whose
/// series has no title leave their slot empty. An empty palette is a caller
/// bug: the legend is skipped with a warning.
pub(super) fn append_legend<'a>(
    frame: &mut RenderFrame,
    viewport: Viewport,
    row_y: f64,
    colors: &[Color],
    title_for: impl Fn(usize) -> Option<&'a str>,
    settings: &ChartSettings,
) {
    if !settings.show_legends {
        return;
    }
    if colors.is_empty() {
        warn!("legend requested with an empty palette; skipping legend");
        return;
    }

    let style = settings.style;
    let half_box = style.legend_box_size_px / 2.0;
    let allowed_length = viewport.width_px() * LEGEND_WIDTH_RATIO;
    let start_x = viewport.width_px() - allowed_length;
    let spacing = allowed_length / colors.len() as f64;

    for (index, color) in colors.iter().enumerate() {
        let Some(title) = title_for(index).filter(|title| !title.is_empty()) else {
            continue;
        };
        let x = start_x + spacing * index as f64;

        frame.push(LinePrimitive::new(
            x,
            row_y,
            x + half_box,
            row_y,
            half_box,
            *color,
        ));
        frame.push(TextPrimitive::new(
            title,
            x + half_box + style.label_padding_px,
            row_y - style.legend_label_font_size_px / 2.0,
            style.legend_label_font_size_px,
            style.label_color,
            TextHAlign::Left,
        ));
    }
}
