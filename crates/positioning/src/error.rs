//! Error types for positioning

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositioningError {
    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading or saving a [`crate::PositioningConfig`]
pub type ConfigError = PositioningError;

pub type Result<T> = std::result::Result<T, PositioningError>;
