//! balance-chart: interactive smoothed balance chart for a banking dashboard.
//!
//! The crate keeps geometry, selection and frame building free of any UI
//! toolkit; backends consume a validated [`render::RenderFrame`].

pub mod api;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BalanceChart, BalanceChartConfig};
pub use error::{ChartError, ChartResult};
