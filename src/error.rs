//! Error types for the simulation

use thiserror::Error;

/// Simulation error types
#[derive(Error, Debug)]
pub enum SimError {
    /// State name outside ready/playing/paused/gameover
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Config JSON could not be parsed
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
