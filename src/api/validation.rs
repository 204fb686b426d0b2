use crate::error::{ChartError, ChartResult};

use super::{ChartSettings, RenderStyle};

pub(super) fn validate_chart_settings(settings: &ChartSettings) -> ChartResult<()> {
    if settings.grid_line_count == 0 {
        return Err(ChartError::InvalidData(
            "grid line count must be >= 1".to_owned(),
        ));
    }

    for (index, color) in settings.colors.iter().enumerate() {
        color.validate().map_err(|err| {
            ChartError::InvalidData(format!("preset color {index} is invalid: {err}"))
        })?;
    }

    validate_render_style(settings.style)
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    style.axis_color.validate()?;
    style.grid_line_color.validate()?;
    style.label_color.validate()?;

    for (name, value) in [
        ("axis_line_width", style.axis_line_width),
        ("grid_line_width", style.grid_line_width),
        ("series_line_width", style.series_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("axis_title_font_size_px", style.axis_title_font_size_px),
        ("legend_label_font_size_px", style.legend_label_font_size_px),
        ("legend_box_size_px", style.legend_box_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.label_padding_px.is_finite() || style.label_padding_px < 0.0 {
        return Err(ChartError::InvalidData(
            "render style `label_padding_px` must be finite and >= 0".to_owned(),
        ));
    }

    style.grid_line_style.validate()
}
