mod bar_chart_render_frame_builder;
mod cartesian_frame_builder;
mod chart_config;
mod chart_renderer;
mod chart_view;
mod donut_chart_render_frame_builder;
mod json_contract;
mod legend_builder;
mod line_chart_render_frame_builder;
mod render_style;
mod validation;

pub use bar_chart_render_frame_builder::BarChart;
pub use chart_config::ChartSettings;
pub use chart_renderer::{ChartKind, ChartRenderer};
pub use chart_view::{ChartView, RenderPass};
pub use donut_chart_render_frame_builder::DonutChart;
pub use json_contract::{
    CHART_SETTINGS_JSON_SCHEMA_V1, ChartSettingsJsonContractV1, RENDER_STATE_JSON_SCHEMA_V1,
    RenderStateJsonContractV1,
};
pub use line_chart_render_frame_builder::LineChart;
pub use render_style::RenderStyle;
