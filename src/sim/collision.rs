//! Per-frame collision resolution between projectiles and ships
//!
//! [`resolve`] applies damage to ships but never removes anything: it reports
//! which entities died this frame and the engine removes them. Slices are
//! taken instead of `Vec`s so removal is impossible here.

use super::entity::{Enemy, EntityId, Player, Projectile};

/// Outcome of one frame's collision pass
///
/// Each list holds an id at most once, in order of detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub destroyed_enemies: Vec<EntityId>,
    pub destroyed_player_projectiles: Vec<EntityId>,
    pub destroyed_enemy_projectiles: Vec<EntityId>,
    /// The player took damage this frame
    pub player_hit: bool,
}

impl CollisionResult {
    pub fn is_empty(&self) -> bool {
        self.destroyed_enemies.is_empty()
            && self.destroyed_player_projectiles.is_empty()
            && self.destroyed_enemy_projectiles.is_empty()
            && !self.player_hit
    }
}

/// Insert `id` unless already present
fn record(set: &mut Vec<EntityId>, id: EntityId) {
    if !set.contains(&id) {
        set.push(id);
    }
}

/// Resolve projectile hits for one frame
///
/// Player projectiles are tested against enemies in collection order; a
/// projectile hits only the first live enemy it overlaps. Enemy projectiles
/// are then tested against the player, who cannot be hit once destroyed.
pub fn resolve(
    player: &mut Player,
    enemies: &mut [Enemy],
    player_projectiles: &[Projectile],
    enemy_projectiles: &[Projectile],
) -> CollisionResult {
    let mut result = CollisionResult::default();

    for projectile in player_projectiles {
        if result
            .destroyed_player_projectiles
            .contains(&projectile.body.id)
        {
            continue;
        }

        let target = enemies.iter_mut().find(|enemy| {
            !enemy.is_destroyed()
                && !result.destroyed_enemies.contains(&enemy.body.id)
                && projectile.body.intersects(&enemy.body)
        });

        if let Some(enemy) = target {
            enemy.health.take_damage(projectile.damage);
            record(&mut result.destroyed_player_projectiles, projectile.body.id);
            if enemy.is_destroyed() {
                record(&mut result.destroyed_enemies, enemy.body.id);
            }
            log::debug!(
                "Projectile {:?} hit enemy {:?} (hp {})",
                projectile.body.id,
                enemy.body.id,
                enemy.health.current()
            );
        }
    }

    for projectile in enemy_projectiles {
        if player.is_destroyed() {
            break;
        }
        if result
            .destroyed_enemy_projectiles
            .contains(&projectile.body.id)
        {
            continue;
        }
        if projectile.body.intersects(&player.body) {
            player.health.take_damage(projectile.damage);
            record(&mut result.destroyed_enemy_projectiles, projectile.body.id);
            result.player_hit = true;
            log::debug!(
                "Projectile {:?} hit player (hp {})",
                projectile.body.id,
                player.health.current()
            );
        }
    }

    result
}
