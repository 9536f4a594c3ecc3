//! Per-frame simulation step
//!
//! Phases run in a fixed order: motion, shooting, collision, cleanup,
//! win/lose evaluation. Later phases rely on the motion and damage applied
//! by earlier ones.

use super::collision::{CollisionResult, resolve};
use super::entity::{Body, Owner, Projectile};
use super::geom::Vector2;
use super::observer::GameObserver;
use super::state::{Engine, GameState};

impl<O: GameObserver> Engine<O> {
    /// Advance one frame; does nothing unless playing
    pub fn update(&mut self) {
        // Don't tick if paused or the round is over
        if self.state != GameState::Playing {
            return;
        }

        // Derive the clock from the frame count so it never drifts
        self.frame += 1;
        self.clock = self.frame as f32 * self.config.frame_dt();

        self.apply_motion();
        self.fire_weapons();
        self.resolve_collisions();
        self.cull_projectiles();
        self.evaluate_outcome();
    }

    fn apply_motion(&mut self) {
        // Player velocity stays zero; input moves it directly
        self.player.body.step();
        for enemy in &mut self.enemies {
            enemy.body.step();
        }
        for projectile in self
            .player_projectiles
            .iter_mut()
            .chain(self.enemy_projectiles.iter_mut())
        {
            projectile.body.step();
        }
    }

    fn fire_weapons(&mut self) {
        let now = self.clock;

        // Player auto-fires whenever its cooldown allows
        if !self.player.is_destroyed() && self.player.cooldown.try_fire(now) {
            let shooter = self.player.body.clone();
            let shot = self.make_projectile(&shooter, Owner::Player);
            log::trace!("Player fired {:?} at t={now:.2}", shot.body.id);
            self.player_projectiles.push(shot);
        }

        // Collect shooters first; spawning needs `&mut self` for ids
        let mut volley = Vec::new();
        for enemy in &mut self.enemies {
            if !enemy.is_destroyed() && enemy.cooldown.try_fire(now) {
                volley.push(enemy.body.clone());
            }
        }
        for shooter in &volley {
            let shot = self.make_projectile(shooter, Owner::Enemy);
            log::trace!("Enemy {:?} fired {:?} at t={now:.2}", shooter.id, shot.body.id);
            self.enemy_projectiles.push(shot);
        }
    }

    /// Player shots appear above the ship moving up, enemy shots below moving down
    fn make_projectile(&mut self, shooter: &Body, owner: Owner) -> Projectile {
        let cfg = &self.config.projectile;
        let size = cfg.size;
        let x = shooter.center_x() - size.width / 2.0;
        let (y, velocity) = match owner {
            Owner::Player => (
                shooter.position.y - size.height,
                Vector2::new(0.0, -cfg.player_speed),
            ),
            Owner::Enemy => (
                shooter.position.y + shooter.size.height,
                Vector2::new(0.0, cfg.enemy_speed),
            ),
        };
        let damage = cfg.damage;
        Projectile {
            body: Body::new(self.ids.next_id(), Vector2::new(x, y), velocity, size),
            damage,
            owner,
        }
    }

    fn resolve_collisions(&mut self) {
        let CollisionResult {
            destroyed_enemies,
            destroyed_player_projectiles,
            destroyed_enemy_projectiles,
            player_hit,
        } = resolve(
            &mut self.player,
            &mut self.enemies,
            &self.player_projectiles,
            &self.enemy_projectiles,
        );

        // Remove everything the resolver marked this frame
        self.enemies
            .retain(|e| !destroyed_enemies.contains(&e.body.id));
        self.player_projectiles
            .retain(|p| !destroyed_player_projectiles.contains(&p.body.id));
        self.enemy_projectiles
            .retain(|p| !destroyed_enemy_projectiles.contains(&p.body.id));

        // Award kills; saturate rather than overflow on huge per-kill values
        if !destroyed_enemies.is_empty() {
            let gained = self
                .config
                .score_per_kill
                .saturating_mul(destroyed_enemies.len() as u64);
            log::debug!(
                "Frame {}: {} enemies destroyed (+{gained})",
                self.frame,
                destroyed_enemies.len()
            );
            self.set_score(self.score.saturating_add(gained));
        }

        // One health notification per frame, however many shots landed
        if player_hit {
            let health = self.player.health.current();
            self.observer.on_health_changed(health);
        }
    }

    /// Drop projectiles that have left the arena vertically
    fn cull_projectiles(&mut self) {
        let arena_height = self.arena.height;
        let on_screen = |p: &Projectile| {
            let y = p.body.position.y;
            let h = p.body.size.height;
            y >= -h && y <= arena_height + h
        };
        self.player_projectiles.retain(on_screen);
        self.enemy_projectiles.retain(on_screen);
    }

    fn evaluate_outcome(&mut self) {
        // Any enemy at or below the player's line ends the round
        let player_y = self.player.body.position.y;
        let breached = self
            .enemies
            .iter()
            .any(|e| e.body.position.y >= player_y);

        // Loss is checked first so it wins a same-frame tie
        if self.player.is_destroyed() || breached {
            log::info!(
                "Game over at frame {} (score {}, breached: {breached})",
                self.frame,
                self.score
            );
            self.finish(false);
        } else if self.enemies.is_empty() {
            log::info!("Wave cleared at frame {} (score {})", self.frame, self.score);
            self.finish(true);
        }
    }

    fn finish(&mut self, won: bool) {
        let state = if won {
            GameState::GameWon
        } else {
            GameState::GameOver
        };
        self.set_state(state);
        self.observer.on_game_ended(won);
    }
}
