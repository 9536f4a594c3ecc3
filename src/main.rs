//! Arcade Shooter headless driver
//!
//! Runs the simulation at a nominal 60 Hz with a simple autopilot, logging
//! every observer notification. Usage:
//!
//! ```text
//! arcade-shooter [config.json]
//! ```
//!
//! Set `RUST_LOG=debug` to see hits and kills.

use arcade_shooter::sim::{BoundingSize, Engine, GameObserver, GameState};
use arcade_shooter::{GameConfig, GameError};

/// Arena used by the headless driver
const ARENA: BoundingSize = BoundingSize::new(360.0, 640.0);
/// Two minutes at 60 Hz
const MAX_FRAMES: u64 = 60 * 120;

/// Forwards notifications to the log
struct LogObserver;

impl GameObserver for LogObserver {
    fn on_state_changed(&mut self, state: GameState) {
        log::info!("State -> {:?}", state);
    }

    fn on_score_changed(&mut self, score: u64) {
        log::info!("Score: {}", score);
    }

    fn on_health_changed(&mut self, health: u32) {
        log::warn!("Player hit! Health: {}", health);
    }

    fn on_game_ended(&mut self, won: bool) {
        log::info!("{}", if won { "You win!" } else { "Game over" });
    }
}

/// Steer under the nearest enemy, horizontally
fn autopilot(engine: &mut Engine<LogObserver>) {
    let player_x = engine.player().body.center_x();
    let target = engine
        .enemies()
        .iter()
        .map(|e| e.body.center_x())
        .min_by(|a, b| {
            (a - player_x)
                .abs()
                .partial_cmp(&(b - player_x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let step = engine.config().player.move_step;
    if let Some(x) = target {
        if x < player_x - step {
            engine.move_player_left();
        } else if x > player_x + step {
            engine.move_player_right();
        }
    }
}

fn run() -> Result<(), GameError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut engine = Engine::new(ARENA, config, LogObserver)?;

    while engine.state() == GameState::Playing && engine.frame() < MAX_FRAMES {
        autopilot(&mut engine);
        engine.update();
    }

    log::info!(
        "Finished after {} frames ({:.1}s): {:?}, score {}, health {}",
        engine.frame(),
        engine.clock(),
        engine.state(),
        engine.score(),
        engine.player_health()
    );

    match serde_json::to_string_pretty(&engine.entities()) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(e) => log::warn!("Could not serialize final snapshot: {e}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Arcade Shooter (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
