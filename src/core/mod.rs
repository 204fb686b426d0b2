pub mod bar_series;
pub mod chart_data;
pub mod donut_series;
pub mod layout;
pub mod line_series;
pub mod scale;
pub mod types;
pub mod value;

pub use bar_series::{BarGeometry, project_bars};
pub use chart_data::{AxesSettings, AxisSetting, ChartData, Series, validate_chart_json};
pub use donut_series::{DonutRing, DonutSegment, project_donut_rings};
pub use layout::{
    CartesianLayout, DEFAULT_GRID_LINE_COUNT, DonutLayout, Margins, RenderState, ValueAxis,
};
pub use line_series::{LineSegment, project_line_segments};
pub use scale::LinearScale;
pub use types::{Point, Viewport};
pub use value::{TypedValue, format_number};
