//! Outbound notifications from the engine to its presentation layer

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Notification emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    StateChanged(GameState),
    ScoreChanged(u64),
    HealthChanged(u32),
    GameEnded { won: bool },
}

/// Receiver for engine notifications
///
/// Called synchronously, on the thread running the engine, exactly once per
/// event. All methods default to no-ops.
pub trait GameObserver {
    fn on_state_changed(&mut self, _state: GameState) {}
    fn on_score_changed(&mut self, _score: u64) {}
    fn on_health_changed(&mut self, _health: u32) {}
    fn on_game_ended(&mut self, _won: bool) {}
}

/// Ignores every notification
impl GameObserver for () {}

/// Queues notifications as [`GameEvent`]s for the driver to drain
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

impl GameObserver for EventLog {
    fn on_state_changed(&mut self, state: GameState) {
        self.events.push(GameEvent::StateChanged(state));
    }

    fn on_score_changed(&mut self, score: u64) {
        self.events.push(GameEvent::ScoreChanged(score));
    }

    fn on_health_changed(&mut self, health: u32) {
        self.events.push(GameEvent::HealthChanged(health));
    }

    fn on_game_ended(&mut self, won: bool) {
        self.events.push(GameEvent::GameEnded { won });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_score_changed(10);
        log.on_health_changed(2);
        log.on_state_changed(GameState::GameOver);
        log.on_game_ended(false);

        assert_eq!(
            log.events(),
            &[
                GameEvent::ScoreChanged(10),
                GameEvent::HealthChanged(2),
                GameEvent::StateChanged(GameState::GameOver),
                GameEvent::GameEnded { won: false },
            ]
        );
        assert_eq!(log.drain().len(), 4);
        assert!(log.events().is_empty());
    }
}
