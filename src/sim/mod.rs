//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `update()`
//! - Seeded RNG only
//! - Stable iteration order (spawn / fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geom;
pub mod observer;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, resolve};
pub use entity::{
    Body, Cooldown, Enemy, EntityId, EntityIds, EntityKind, EntitySnapshot, Health, Owner, Player,
    Projectile,
};
pub use geom::{Aabb, BoundingSize, Vector2};
pub use observer::{EventLog, GameEvent, GameObserver};
pub use spawner::{SpawnLayout, spawn};
pub use state::{Engine, GameState};
