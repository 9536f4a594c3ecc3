//! Entity model
//!
//! Ships and projectiles are built from small components: every entity has a
//! [`Body`] (identity + motion + bounds), ships add [`Health`] and a shooting
//! [`Cooldown`]. The set of entity kinds is closed; [`EntityKind`] tags them
//! for rendering snapshots.

use serde::{Deserialize, Serialize};

use super::geom::{Aabb, BoundingSize, Vector2};

/// Stable per-engine entity handle; never reused within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Monotonic entity id allocator
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity ID
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Identity, motion and bounds shared by every entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: EntityId,
    pub position: Vector2,
    /// Displacement applied once per frame
    pub velocity: Vector2,
    pub size: BoundingSize,
}

impl Body {
    pub fn new(id: EntityId, position: Vector2, velocity: Vector2, size: BoundingSize) -> Self {
        Self {
            id,
            position,
            velocity,
            size,
        }
    }

    /// Advance one frame
    #[inline]
    pub fn step(&mut self) {
        self.position += self.velocity;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.position, self.size)
    }

    pub fn intersects(&self, other: &Body) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// Horizontal centre of the bounding box
    pub fn center_x(&self) -> f32 {
        self.position.x + self.size.width / 2.0
    }
}

/// Hit points, floored at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Apply damage; health never drops below zero
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn is_destroyed(&self) -> bool {
        self.current == 0
    }

    /// Refill to max
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// Minimum simulated time between successive shots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Seconds
    pub interval: f32,
    /// Clock time of the last successful shot; `None` means ready
    pub last_shot: Option<f32>,
}

impl Cooldown {
    /// Ready to fire immediately
    pub fn ready(interval: f32) -> Self {
        Self {
            interval,
            last_shot: None,
        }
    }

    /// Treat `now` as the last shot, so the first shot waits one interval
    pub fn armed_at(interval: f32, now: f32) -> Self {
        Self {
            interval,
            last_shot: Some(now),
        }
    }

    pub fn can_fire(&self, now: f32) -> bool {
        match self.last_shot {
            None => true,
            Some(t) => now - t >= self.interval,
        }
    }

    /// Record a shot if the cooldown has elapsed; returns whether it fired
    pub fn try_fire(&mut self, now: f32) -> bool {
        if self.can_fire(now) {
            self.last_shot = Some(now);
            true
        } else {
            false
        }
    }
}

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub health: Health,
    pub cooldown: Cooldown,
}

impl Player {
    pub fn is_destroyed(&self) -> bool {
        self.health.is_destroyed()
    }
}

/// A grid invader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub health: Health,
    pub cooldown: Cooldown,
}

impl Enemy {
    pub fn is_destroyed(&self) -> bool {
        self.health.is_destroyed()
    }
}

/// A shot travelling vertically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    pub damage: u32,
    pub owner: Owner,
}

/// Tag for the closed set of entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerProjectile,
    EnemyProjectile,
}

/// Flattened, render-ready view of one live entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vector2,
    pub size: BoundingSize,
}

impl EntitySnapshot {
    pub fn of(kind: EntityKind, body: &Body) -> Self {
        Self {
            id: body.id,
            kind,
            position: body.position,
            size: body.size,
        }
    }
}

impl From<&Projectile> for EntitySnapshot {
    fn from(p: &Projectile) -> Self {
        let kind = match p.owner {
            Owner::Player => EntityKind::PlayerProjectile,
            Owner::Enemy => EntityKind::EnemyProjectile,
        };
        Self::of(kind, &p.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids = EntityIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_body_step() {
        let mut body = Body::new(
            EntityId(1),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, -8.0),
            BoundingSize::new(4.0, 10.0),
        );
        body.step();
        body.step();
        assert_eq!(body.position, Vector2::new(10.0, -6.0));
    }

    #[test]
    fn test_cooldown_gating() {
        let mut cd = Cooldown::ready(0.5);
        assert!(cd.try_fire(0.0));
        assert!(!cd.try_fire(0.25));
        assert!(!cd.try_fire(0.49));
        assert!(cd.try_fire(0.5));
        assert_eq!(cd.last_shot, Some(0.5));
    }

    #[test]
    fn test_armed_cooldown_waits_one_interval() {
        let cd = Cooldown::armed_at(2.0, 0.0);
        assert!(!cd.can_fire(1.9));
        assert!(cd.can_fire(2.0));
    }

    #[test]
    fn test_health_reset() {
        let mut health = Health::new(3);
        health.take_damage(3);
        assert!(health.is_destroyed());
        health.reset();
        assert_eq!(health.current(), 3);
        assert!(!health.is_destroyed());
    }

    #[test]
    fn test_projectile_snapshot_kind() {
        let p = Projectile {
            body: Body::new(
                EntityId(9),
                Vector2::ZERO,
                Vector2::ZERO,
                BoundingSize::new(4.0, 10.0),
            ),
            damage: 1,
            owner: Owner::Enemy,
        };
        let snap = EntitySnapshot::from(&p);
        assert_eq!(snap.kind, EntityKind::EnemyProjectile);
        assert_eq!(snap.id, EntityId(9));
    }

    proptest! {
        #[test]
        fn prop_health_never_negative(max in 1u32..10, hits in proptest::collection::vec(0u32..5, 0..20)) {
            let mut health = Health::new(max);
            for hit in hits {
                health.take_damage(hit);
                prop_assert!(health.current() <= max);
                prop_assert_eq!(health.is_destroyed(), health.current() == 0);
            }
        }
    }
}
