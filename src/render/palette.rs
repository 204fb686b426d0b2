use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

use crate::render::Color;

const SEGMENT_BRIGHTNESS_STEP: f64 = 0.05;

/// Source of uniform samples in `[0, 1)` used for generated series colors.
pub trait ColorSource {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic xorshift64 generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seeds from OS entropy, falling back to the system clock.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl ColorSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Draws a fresh seed for one chart view.
#[must_use]
pub fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(1, |elapsed| elapsed.as_nanos() as u64),
    }
}

/// Uniformly random opaque RGB color.
pub fn random_color(source: &mut impl ColorSource) -> Color {
    let red = source.next_unit();
    let green = source.next_unit();
    let blue = source.next_unit();
    Color::rgb(red, green, blue)
}

/// Series colors for one render pass.
///
/// Starts from the caller-supplied colors and grows on demand with random
/// colors. Once assigned, an index keeps its color until [`Palette::reset`].
#[derive(Debug, Clone)]
pub struct Palette<S: ColorSource = SeededRng> {
    preset: Vec<Color>,
    colors: Vec<Color>,
    source: S,
}

impl Palette<SeededRng> {
    #[must_use]
    pub fn seeded(preset: Vec<Color>, seed: u64) -> Self {
        Self::new(preset, SeededRng::new(seed))
    }
}

impl<S: ColorSource> Palette<S> {
    #[must_use]
    pub fn new(preset: Vec<Color>, source: S) -> Self {
        Self {
            colors: preset.clone(),
            preset,
            source,
        }
    }

    pub fn color_for_series(&mut self, index: usize) -> Color {
        while self.colors.len() <= index {
            let color = random_color(&mut self.source);
            trace!(index = self.colors.len(), ?color, "generated series color");
            self.colors.push(color);
        }
        self.colors[index]
    }

    /// Drops generated colors, keeping only the caller-supplied ones.
    pub fn reset(&mut self) {
        self.colors.clone_from(&self.preset);
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Shade of `base` for donut segment `category_index`.
///
/// Brightness rises by 0.05 per index; when that would exceed 1 it falls by
/// the same amount instead, floored at 0.
#[must_use]
pub fn segment_shade(base: Color, category_index: usize) -> Color {
    let (hue, saturation, brightness) = base.to_hsb();
    let offset = category_index as f64 * SEGMENT_BRIGHTNESS_STEP;
    let mut shaded = brightness + offset;
    if shaded > 1.0 {
        shaded = brightness - offset;
    }
    Color::from_hsba(hue, saturation, shaded.max(0.0), base.alpha)
}
