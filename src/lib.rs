//! chart-views: bar, line and donut chart views.
//!
//! A JSON payload is validated once into [`core::ChartData`], laid out per
//! viewport by the shared geometry engine, and rendered into an ordered list
//! of backend-agnostic draw primitives consumed by a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartKind, ChartSettings, ChartView};
pub use error::{ChartError, ChartResult, ValidationError};
