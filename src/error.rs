//! Error types for the particle sketch.
//!
//! The simulation itself never fails; only loading configuration and
//! starting the window can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("UI error: {0}")]
    Ui(String),
}

pub type Result<T> = std::result::Result<T, Error>;
