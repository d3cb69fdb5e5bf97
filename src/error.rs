//! Error type for the simulation crate
//!
//! The physics itself is total; only placement and settings loading can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Spawner could not find a free spot after this many attempts
    #[error("no free spot for a new ball after {attempts} attempts")]
    PlacementFailed { attempts: u32 },
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// Settings JSON was malformed
    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
