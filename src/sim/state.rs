//! Engine state and lifecycle
//!
//! The [`Engine`] owns every entity, the score and the simulation clock.
//! Per-frame stepping lives in `tick.rs`; this file covers construction,
//! read-only accessors, player controls and pause/resume/restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{
    Body, Cooldown, Enemy, EntityIds, EntityKind, EntitySnapshot, Health, Player, Projectile,
};
use super::geom::{BoundingSize, Vector2};
use super::observer::GameObserver;
use super::spawner;
use crate::config::GameConfig;
use crate::error::GameError;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Active gameplay
    Playing,
    /// Player destroyed or the enemy line breached
    GameOver,
    /// Every enemy destroyed
    GameWon,
    /// Frozen until `resume()`
    Paused,
}

impl GameState {
    /// Game over or won
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::GameOver | GameState::GameWon)
    }
}

/// Simulation engine
///
/// Single-threaded: call `update()` and the control methods from the thread
/// driving frames. The observer is invoked synchronously from those calls.
#[derive(Debug)]
pub struct Engine<O: GameObserver = ()> {
    pub(super) config: GameConfig,
    pub(super) arena: BoundingSize,
    pub(super) state: GameState,
    pub(super) score: u64,
    pub(super) player: Player,
    pub(super) enemies: Vec<Enemy>,
    pub(super) player_projectiles: Vec<Projectile>,
    pub(super) enemy_projectiles: Vec<Projectile>,
    /// Simulated seconds since the last (re)start
    pub(super) clock: f32,
    /// Updates run since the last (re)start
    pub(super) frame: u64,
    pub(super) ids: EntityIds,
    pub(super) rng: Pcg32,
    pub(super) observer: O,
}

impl<O: GameObserver> Engine<O> {
    /// Build an engine with the player at bottom-centre and the enemy grid spawned
    pub fn new(arena: BoundingSize, config: GameConfig, observer: O) -> Result<Self, GameError> {
        config.validate()?;

        // The ship must fit horizontally and above its floor margin
        let ship = config.player.size;
        if !arena.is_positive()
            || arena.width < ship.width
            || arena.height < ship.height + config.player.bottom_margin
        {
            return Err(GameError::InvalidArena {
                width: arena.width,
                height: arena.height,
            });
        }

        // Player takes the first id; enemies follow in spawn order
        let mut ids = EntityIds::new();
        let mut rng = Pcg32::seed_from_u64(config.seed);

        let player = Player {
            body: Body::new(
                ids.next_id(),
                player_start(arena, &config),
                Vector2::ZERO,
                ship,
            ),
            health: Health::new(config.player.max_health),
            cooldown: Cooldown::ready(config.player.shooting_interval),
        };

        let enemies = spawner::spawn(
            arena,
            config.spawn.count,
            &config.enemy,
            &config.spawn,
            0.0,
            &mut rng,
            &mut ids,
        )?;

        log::info!(
            "Engine ready: arena {}x{}, {} enemies, seed {}",
            arena.width,
            arena.height,
            enemies.len(),
            config.seed
        );

        Ok(Self {
            config,
            arena,
            state: GameState::Playing,
            score: 0,
            player,
            enemies,
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            clock: 0.0,
            frame: 0,
            ids,
            rng,
            observer,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn player_health(&self) -> u32 {
        self.player.health.current()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn player_projectiles(&self) -> &[Projectile] {
        &self.player_projectiles
    }

    pub fn enemy_projectiles(&self) -> &[Projectile] {
        &self.enemy_projectiles
    }

    pub fn arena(&self) -> BoundingSize {
        self.arena
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Every live entity, built fresh on each call
    pub fn entities(&self) -> Vec<EntitySnapshot> {
        let mut out = Vec::with_capacity(
            1 + self.enemies.len() + self.player_projectiles.len() + self.enemy_projectiles.len(),
        );
        out.push(EntitySnapshot::of(EntityKind::Player, &self.player.body));
        out.extend(
            self.enemies
                .iter()
                .map(|e| EntitySnapshot::of(EntityKind::Enemy, &e.body)),
        );
        out.extend(self.player_projectiles.iter().map(EntitySnapshot::from));
        out.extend(self.enemy_projectiles.iter().map(EntitySnapshot::from));
        out
    }

    pub fn move_player_left(&mut self) {
        self.shift_player(-self.config.player.move_step);
    }

    pub fn move_player_right(&mut self) {
        self.shift_player(self.config.player.move_step);
    }

    /// Ignored unless playing; keeps the ship inside `[0, arena width]`
    fn shift_player(&mut self, dx: f32) {
        // Input during pause or the end screen is dropped silently
        if self.state != GameState::Playing {
            return;
        }
        let max_x = self.arena.width - self.player.body.size.width;
        let body = &mut self.player.body;
        body.position.x = (body.position.x + dx).clamp(0.0, max_x);
    }

    pub fn pause(&mut self) {
        // Only a running round can be paused
        if self.state == GameState::Playing {
            log::info!("Paused at frame {}", self.frame);
            self.set_state(GameState::Paused);
        }
    }

    pub fn resume(&mut self) {
        // Terminal states stay terminal until restart()
        if self.state == GameState::Paused {
            log::info!("Resumed at frame {}", self.frame);
            self.set_state(GameState::Playing);
        }
    }

    /// Start a fresh round
    ///
    /// The player is reset in place, projectiles are cleared and the enemy
    /// grid is respawned. The RNG stream continues, so a new round draws new
    /// shooting intervals.
    pub fn restart(&mut self) -> Result<(), GameError> {
        // Spawn first so a failure leaves the old round untouched
        let enemies = spawner::spawn(
            self.arena,
            self.config.spawn.count,
            &self.config.enemy,
            &self.config.spawn,
            0.0,
            &mut self.rng,
            &mut self.ids,
        )?;

        self.enemies = enemies;
        self.player_projectiles.clear();
        self.enemy_projectiles.clear();
        self.clock = 0.0;
        self.frame = 0;

        // Reset the player in place so its id survives
        self.player.health.reset();
        self.player.body.position = player_start(self.arena, &self.config);
        self.player.body.velocity = Vector2::ZERO;
        self.player.cooldown = Cooldown::ready(self.config.player.shooting_interval);

        log::info!("Restarted with {} enemies", self.enemies.len());
        self.set_score(0);
        self.set_state(GameState::Playing);
        Ok(())
    }

    pub(super) fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.observer.on_state_changed(state);
    }

    pub(super) fn set_score(&mut self, score: u64) {
        self.score = score;
        self.observer.on_score_changed(score);
    }
}

/// Bottom-centre spawn point for the player ship
fn player_start(arena: BoundingSize, config: &GameConfig) -> Vector2 {
    let size = config.player.size;
    Vector2::new(
        (arena.width - size.width) / 2.0,
        arena.height - size.height - config.player.bottom_margin,
    )
}
