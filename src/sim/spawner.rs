//! Enemy grid spawner
//!
//! Lays enemies out row-major from the top-left margin. Placement is fully
//! deterministic; only each enemy's shooting interval is drawn from the RNG.

use rand::Rng;

use super::entity::{Body, Cooldown, Enemy, EntityIds, Health};
use super::geom::{BoundingSize, Vector2};
use crate::config::{EnemyConfig, SpawnConfig};
use crate::error::GameError;

/// Grid dimensions for a given arena and enemy count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnLayout {
    pub columns: usize,
    pub rows: usize,
}

impl SpawnLayout {
    /// Fit as many columns as the arena width allows, then enough rows for `count`
    pub fn compute(
        arena: BoundingSize,
        count: usize,
        enemy: &EnemyConfig,
        spawn: &SpawnConfig,
    ) -> Result<Self, GameError> {
        let cell_width = enemy.size.width + spawn.spacing;
        let usable = arena.width - 2.0 * spawn.left_margin;
        let columns = if usable > 0.0 && cell_width > 0.0 {
            (usable / cell_width).floor() as usize
        } else {
            0
        };

        if columns == 0 {
            return Err(GameError::ArenaTooSmall {
                width: arena.width,
                required: 2.0 * spawn.left_margin + cell_width,
            });
        }

        Ok(Self {
            columns,
            rows: count.div_ceil(columns),
        })
    }
}

/// Build the initial enemy formation
///
/// Every enemy starts with full health, a small downward drift and a
/// shooting interval drawn from `[min, max)`, armed at `now`.
pub fn spawn(
    arena: BoundingSize,
    count: usize,
    enemy: &EnemyConfig,
    spawn: &SpawnConfig,
    now: f32,
    rng: &mut impl Rng,
    ids: &mut EntityIds,
) -> Result<Vec<Enemy>, GameError> {
    let layout = SpawnLayout::compute(arena, count, enemy, spawn)?;

    let step_x = enemy.size.width + spawn.spacing;
    let step_y = enemy.size.height + spawn.spacing;
    let velocity = Vector2::new(0.0, enemy.speed);

    let enemies: Vec<Enemy> = (0..count)
        .map(|i| {
            let (row, col) = (i / layout.columns, i % layout.columns);
            let position = Vector2::new(
                spawn.left_margin + col as f32 * step_x,
                spawn.top_margin + row as f32 * step_y,
            );
            let interval =
                rng.random_range(enemy.min_shooting_interval..enemy.max_shooting_interval);
            Enemy {
                body: Body::new(ids.next_id(), position, velocity, enemy.size),
                health: Health::new(enemy.health),
                cooldown: Cooldown::armed_at(interval, now),
            }
        })
        .collect();

    log::info!(
        "Spawned {} enemies in {}x{} grid (arena {}x{})",
        enemies.len(),
        layout.columns,
        layout.rows,
        arena.width,
        arena.height
    );

    Ok(enemies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawn_default(arena: BoundingSize, count: usize) -> Result<Vec<Enemy>, GameError> {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ids = EntityIds::new();
        spawn(
            arena,
            count,
            &EnemyConfig::default(),
            &SpawnConfig::default(),
            0.0,
            &mut rng,
            &mut ids,
        )
    }

    #[test]
    fn test_layout_300_wide() {
        // (300 - 2*20) / (40 + 10) = 5.2 -> 5 columns
        let layout = SpawnLayout::compute(
            BoundingSize::new(300.0, 500.0),
            12,
            &EnemyConfig::default(),
            &SpawnConfig::default(),
        )
        .unwrap();
        assert_eq!(layout, SpawnLayout { columns: 5, rows: 3 });
    }

    #[test]
    fn test_spawn_twelve_without_overlap() {
        let enemies = spawn_default(BoundingSize::new(300.0, 500.0), 12).unwrap();
        assert_eq!(enemies.len(), 12);

        for (i, a) in enemies.iter().enumerate() {
            for b in &enemies[i + 1..] {
                assert!(!a.body.intersects(&b.body), "{:?} overlaps {:?}", a.body.id, b.body.id);
                assert_ne!(a.body.id, b.body.id);
            }
        }

        // Row-major: last row holds the remaining two
        assert_eq!(enemies[0].body.position, Vector2::new(20.0, 50.0));
        assert_eq!(enemies[4].body.position, Vector2::new(220.0, 50.0));
        assert_eq!(enemies[5].body.position, Vector2::new(20.0, 90.0));
        assert_eq!(enemies[11].body.position, Vector2::new(70.0, 130.0));
    }

    #[test]
    fn test_spawned_enemy_properties() {
        let enemies = spawn_default(BoundingSize::new(300.0, 500.0), 12).unwrap();
        for enemy in &enemies {
            assert!((2.0..4.0).contains(&enemy.cooldown.interval));
            assert_eq!(enemy.cooldown.last_shot, Some(0.0));
            assert_eq!(enemy.health.current(), 1);
            assert!(enemy.body.velocity.y > 0.0);
            assert_eq!(enemy.body.velocity.x, 0.0);
        }
    }

    #[test]
    fn test_spawn_zero_is_empty() {
        let enemies = spawn_default(BoundingSize::new(300.0, 500.0), 0).unwrap();
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_narrow_arena_is_rejected() {
        let err = spawn_default(BoundingSize::new(60.0, 500.0), 3).unwrap_err();
        assert!(matches!(err, GameError::ArenaTooSmall { .. }));
    }

    #[test]
    fn test_same_seed_same_intervals() {
        let a = spawn_default(BoundingSize::new(300.0, 500.0), 6).unwrap();
        let b = spawn_default(BoundingSize::new(300.0, 500.0), 6).unwrap();
        assert_eq!(a, b);
    }
}
