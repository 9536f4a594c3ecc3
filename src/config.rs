//! Game configuration
//!
//! Every size, speed, cooldown and score value the simulation reads lives
//! here, so a driver can tune a session from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::BoundingSize;

/// Player ship tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: BoundingSize,
    pub max_health: u32,
    /// Seconds between automatic shots
    pub shooting_interval: f32,
    /// Horizontal shift per move input
    pub move_step: f32,
    /// Distance between the ship's bottom edge and the arena floor
    pub bottom_margin: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: BoundingSize::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            max_health: PLAYER_MAX_HEALTH,
            shooting_interval: PLAYER_SHOOTING_INTERVAL,
            move_step: PLAYER_MOVE_STEP,
            bottom_margin: PLAYER_BOTTOM_MARGIN,
        }
    }
}

/// Enemy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: BoundingSize,
    pub health: u32,
    /// Shooting interval is drawn uniformly from `[min, max)` per enemy
    pub min_shooting_interval: f32,
    pub max_shooting_interval: f32,
    /// Downward drift per frame
    pub speed: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: BoundingSize::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            health: ENEMY_HEALTH,
            min_shooting_interval: ENEMY_MIN_SHOOTING_INTERVAL,
            max_shooting_interval: ENEMY_MAX_SHOOTING_INTERVAL,
            speed: ENEMY_SPEED,
        }
    }
}

/// Projectile tuning (speeds are magnitudes; direction follows the owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub size: BoundingSize,
    pub damage: u32,
    pub player_speed: f32,
    pub enemy_speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            size: BoundingSize::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            damage: PROJECTILE_DAMAGE,
            player_speed: PLAYER_PROJECTILE_SPEED,
            enemy_speed: ENEMY_PROJECTILE_SPEED,
        }
    }
}

/// Enemy grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub left_margin: f32,
    pub top_margin: f32,
    /// Gap between neighbouring cells, both axes
    pub spacing: f32,
    /// Enemies spawned at setup and on every restart
    pub count: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            left_margin: SPAWN_LEFT_MARGIN,
            top_margin: SPAWN_TOP_MARGIN,
            spacing: SPAWN_SPACING,
            count: SPAWN_COUNT,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub projectile: ProjectileConfig,
    pub spawn: SpawnConfig,
    pub score_per_kill: u64,
    /// Updates per simulated second
    pub frame_rate: f32,
    /// Seed for the shooting-interval RNG
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            projectile: ProjectileConfig::default(),
            spawn: SpawnConfig::default(),
            score_per_kill: SCORE_PER_KILL,
            frame_rate: FRAME_RATE,
            seed: SEED,
        }
    }
}

impl GameConfig {
    /// Simulated seconds per `update()`
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        let sizes = [
            ("player.size", self.player.size),
            ("enemy.size", self.enemy.size),
            ("projectile.size", self.projectile.size),
        ];
        for (name, size) in sizes {
            if !size.is_positive() {
                return Err(invalid(format!("{name} must be positive and finite")));
            }
        }

        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(invalid("frame_rate must be positive"));
        }
        if self.player.max_health == 0 {
            return Err(invalid("player.max_health must be at least 1"));
        }
        if self.enemy.health == 0 {
            return Err(invalid("enemy.health must be at least 1"));
        }
        if self.projectile.damage == 0 {
            return Err(invalid("projectile.damage must be at least 1"));
        }
        if !(self.player.shooting_interval >= 0.0) {
            return Err(invalid("player.shooting_interval must be non-negative"));
        }
        let (lo, hi) = (
            self.enemy.min_shooting_interval,
            self.enemy.max_shooting_interval,
        );
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo < hi) {
            return Err(invalid(format!(
                "enemy shooting interval range [{lo}, {hi}) is empty or negative"
            )));
        }
        if !(self.player.move_step.is_finite() && self.player.move_step >= 0.0) {
            return Err(invalid("player.move_step must be non-negative"));
        }
        let speeds = [
            ("enemy.speed", self.enemy.speed),
            ("projectile.player_speed", self.projectile.player_speed),
            ("projectile.enemy_speed", self.projectile.enemy_speed),
        ];
        for (name, speed) in speeds {
            if !speed.is_finite() {
                return Err(invalid(format!("{name} must be finite")));
            }
        }
        if !(self.spawn.spacing >= 0.0
            && self.spawn.left_margin >= 0.0
            && self.spawn.top_margin >= 0.0)
        {
            return Err(invalid("spawn margins and spacing must be non-negative"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GameError {
    GameError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(config.player.max_health, 3);
        assert_eq!(config.score_per_kill, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            GameConfig::from_json_str(r#"{ "seed": 7, "spawn": { "count": 4 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.spawn.count, 4);
        assert_eq!(config.spawn.spacing, SPAWN_SPACING);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_interval_range() {
        let json = r#"{ "enemy": { "min_shooting_interval": 4.0, "max_shooting_interval": 2.0 } }"#;
        assert!(matches!(
            GameConfig::from_json_str(json),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let mut config = GameConfig::default();
        config.frame_rate = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_speeds() {
        let mut config = GameConfig::default();
        config.enemy.speed = f32::NAN;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let mut config = GameConfig::default();
        config.projectile.player_speed = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.projectile.enemy_speed = f32::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(GameError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::load("/definitely/not/here.json"),
            Err(GameError::Io(_))
        ));
    }
}
