use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a value domain onto a pixel range.
///
/// The range may be descending, which is how value axes map larger values
/// towards the top of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Signed pixel distance covered by one domain unit.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        (self.range_end - self.range_start) / (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        self.range_start + (value - self.domain_start) * self.pixels_per_unit()
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        self.domain_start + (pixel - self.range_start) / self.pixels_per_unit()
    }
}
