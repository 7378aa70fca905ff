use thiserror::Error;

use crate::core::DegenerateReason;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate series: {0}")]
    Degenerate(DegenerateReason),

    #[error("failed to decode dashboard json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read dashboard data: {0}")]
    Io(#[from] std::io::Error),
}
