//! Errors raised while loading levels and configuration.

use thiserror::Error;

/// Errors that can occur while setting up a simulation.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
