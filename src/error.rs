//! Error types for engine construction, spawning and configuration loading

use thiserror::Error;

/// Errors surfaced by the simulation core
#[derive(Error, Debug)]
pub enum GameError {
    /// Not even one spawn column fits inside the arena
    #[error("arena width {width} cannot fit a single enemy column (needs at least {required})")]
    ArenaTooSmall { width: f32, required: f32 },

    /// Arena dimensions are unusable for the player ship
    #[error("invalid arena size {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    /// A configuration value failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be decoded
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
