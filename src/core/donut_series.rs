use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::layout::DONUT_RING_GAP_RADIANS;
use crate::core::{ChartData, DonutLayout};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub category_index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// One concentric ring, i.e. one series with a non-zero sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutRing {
    pub series_index: usize,
    /// Position among drawn rings, innermost first.
    pub ring_index: usize,
    pub radius: f64,
    pub segments: Vec<DonutSegment>,
}

/// Projects every series onto concentric rings.
///
/// The sweep angle carries over from ring to ring, with a fixed gap inserted
/// before each ring. Series summing to exactly zero, or whose sum overflows,
/// are skipped and neither take a ring slot nor advance the angle.
#[must_use]
pub fn project_donut_rings(data: &ChartData, layout: &DonutLayout) -> Vec<DonutRing> {
    let mut rings = Vec::with_capacity(data.series_count());
    let mut start_angle = 0.0;

    for (series_index, series) in data.series().iter().enumerate() {
        let sum = series.sum();
        if sum == 0.0 {
            debug!(series = series_index, "skipping zero-sum donut series");
            continue;
        }
        if !sum.is_finite() {
            warn!(series = series_index, "skipping donut series with overflowing sum");
            continue;
        }

        let ring_index = rings.len();
        start_angle += DONUT_RING_GAP_RADIANS;
        let mut segments = Vec::with_capacity(series.vertical().len());
        for (category_index, value) in series.values().enumerate() {
            let end_angle = start_angle + TAU * (value / sum);
            segments.push(DonutSegment {
                category_index,
                start_angle,
                end_angle,
            });
            start_angle = end_angle;
        }

        rings.push(DonutRing {
            series_index,
            ring_index,
            radius: layout.ring_radius(ring_index),
            segments,
        });
    }

    rings
}
