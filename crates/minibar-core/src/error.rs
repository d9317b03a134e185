// File: crates/minibar-core/src/error.rs
// Summary: Error type shared by layout, surfaces, and the chart engine.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("margin {margin} leaves no plot area on a {width}x{height} canvas")]
    DegenerateCanvas { width: u32, height: u32, margin: u32 },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Only ever seen by callers of `Rgb::from_hex`; chart drawing recovers from it.
    #[error("invalid hex color '{0}'")]
    InvalidColor(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
