use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_GRID_LINE_COUNT;
use crate::error::ChartResult;
use crate::render::Color;

use super::RenderStyle;
use super::validation::validate_chart_settings;

/// Render-time configuration of one chart view.
///
/// Every field has a default so partial JSON documents deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub show_grid: bool,
    pub show_legends: bool,
    pub show_axis_labels: bool,
    pub show_axis_titles: bool,
    /// Caller-seeded series colors; missing entries are generated per pass.
    pub colors: Vec<Color>,
    pub grid_line_count: usize,
    /// Fixes the generator behind random series colors. Drawn from OS entropy
    /// when absent.
    pub color_seed: Option<u64>,
    pub style: RenderStyle,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_legends: true,
            show_axis_labels: true,
            show_axis_titles: false,
            colors: Vec::new(),
            grid_line_count: DEFAULT_GRID_LINE_COUNT,
            color_seed: None,
            style: RenderStyle::default(),
        }
    }
}

impl ChartSettings {
    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_legends(mut self, show: bool) -> Self {
        self.show_legends = show;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, show: bool) -> Self {
        self.show_axis_titles = show;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_grid_line_count(mut self, count: usize) -> Self {
        self.grid_line_count = count;
        self
    }

    #[must_use]
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_settings(self)
    }
}
