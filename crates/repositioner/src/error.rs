//! Error types for the frame driver

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositionError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Recompute failed: {0}")]
    Recompute(#[source] E),

    #[error("Frame driver has stopped")]
    DriverStopped,

    #[error("Frame driver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T, E> = std::result::Result<T, RepositionError<E>>;
