mod chart;
mod chart_config;
mod interaction_controller;
mod json_contract;
mod render_frame_builder;
mod render_style;

pub use chart::BalanceChart;
pub use chart_config::{
    BalanceChartConfig, DASHBOARD_RANGE_LABELS, DASHBOARD_SAMPLES, DASHBOARD_Y_TICKS,
};
pub use json_contract::{
    SELECTION_SNAPSHOT_JSON_SCHEMA_V1, SelectionSnapshot, SelectionSnapshotJsonContractV1,
};
pub use render_frame_builder::format_rounded;
pub use render_style::ChartStyle;
