//! Arcade Shooter - simulation core for a grid-invader style shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, engine)
//! - `config`: Data-driven game balance
//! - `error`: Construction and configuration errors
//!
//! Rendering, input devices, audio and persistence belong to the driver
//! that calls into [`sim::Engine`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;
pub use sim::{Engine, GameEvent, GameObserver, GameState};

/// Default tuning constants (overridable through [`GameConfig`])
pub mod consts {
    /// Nominal frame rate of the external driver (Hz)
    pub const FRAME_RATE: f32 = 60.0;

    /// Points awarded per destroyed enemy
    pub const SCORE_PER_KILL: u64 = 10;

    /// Player ship defaults
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_MAX_HEALTH: u32 = 3;
    pub const PLAYER_SHOOTING_INTERVAL: f32 = 0.5;
    /// Horizontal shift per directional input
    pub const PLAYER_MOVE_STEP: f32 = 5.0;
    /// Gap between the player ship and the arena floor
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_HEALTH: u32 = 1;
    pub const ENEMY_MIN_SHOOTING_INTERVAL: f32 = 2.0;
    pub const ENEMY_MAX_SHOOTING_INTERVAL: f32 = 4.0;
    /// Downward drift per frame
    pub const ENEMY_SPEED: f32 = 0.2;

    /// Projectile defaults (speeds are per frame)
    pub const PROJECTILE_WIDTH: f32 = 4.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_DAMAGE: u32 = 1;
    pub const PLAYER_PROJECTILE_SPEED: f32 = 8.0;
    pub const ENEMY_PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy grid layout
    pub const SPAWN_LEFT_MARGIN: f32 = 20.0;
    pub const SPAWN_TOP_MARGIN: f32 = 50.0;
    pub const SPAWN_SPACING: f32 = 10.0;
    pub const SPAWN_COUNT: usize = 12;

    /// Default RNG seed
    pub const SEED: u64 = 0x5eed_cafe;
}
