//! Engine error types.

use thiserror::Error;

/// Errors surfaced by settings loading and the external collaborators
/// (render surface, snapshot sink). The viewport itself never fails.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("settings JSON error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("render surface error: {0}")]
    Surface(String),

    #[error("snapshot failed: {0}")]
    Snapshot(String),
}
