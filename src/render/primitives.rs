use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from hue, saturation and brightness, all in `[0, 1]`.
    #[must_use]
    pub fn from_hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let sector = (hue.rem_euclid(1.0)) * 6.0;
        let index = sector.floor();
        let fraction = sector - index;
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * fraction);
        let t = brightness * (1.0 - saturation * (1.0 - fraction));

        let (red, green, blue) = match index as u8 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::rgba(red, green, blue, alpha)
    }

    /// Returns `(hue, saturation, brightness)`, each in `[0, 1]`.
    #[must_use]
    pub fn to_hsb(self) -> (f64, f64, f64) {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        if delta <= 0.0 {
            return (0.0, saturation, max);
        }

        let hue_sector = if max == self.red {
            ((self.green - self.blue) / delta).rem_euclid(6.0)
        } else if max == self.green {
            (self.blue - self.red) / delta + 2.0
        } else {
            (self.red - self.green) / delta + 4.0
        };
        (hue_sector / 6.0, saturation, max)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern for line primitives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    /// Repeating `on_px` drawn / `off_px` skipped pattern.
    Dashed { on_px: f64, off_px: f64 },
}

impl LineStrokeStyle {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid => Ok(()),
            Self::Dashed { on_px, off_px } => {
                if !on_px.is_finite() || !off_px.is_finite() || on_px <= 0.0 || off_px < 0.0 {
                    return Err(ChartError::InvalidData(
                        "dash pattern must be finite with on > 0 and off >= 0".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        matches!(self.stroke_style, LineStrokeStyle::Dashed { .. })
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Draw command for one stroked circular arc.
///
/// Angles are in radians from the positive x-axis and sweep clockwise on a
/// y-down surface, from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl ArcPrimitive {
    #[must_use]
    pub const fn new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite()
            || !self.start_angle.is_finite()
            || !self.end_angle.is_finite()
        {
            return Err(ChartError::InvalidData(
                "arc center and angles must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "arc radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "arc stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One renderable unit handed to a backend, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Line(LinePrimitive),
    Arc(ArcPrimitive),
    Text(TextPrimitive),
}

impl DrawPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<LinePrimitive> for DrawPrimitive {
    fn from(line: LinePrimitive) -> Self {
        Self::Line(line)
    }
}

impl From<ArcPrimitive> for DrawPrimitive {
    fn from(arc: ArcPrimitive) -> Self {
        Self::Arc(arc)
    }
}

impl From<TextPrimitive> for DrawPrimitive {
    fn from(text: TextPrimitive) -> Self {
        Self::Text(text)
    }
}
