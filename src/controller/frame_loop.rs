use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::model::{Command, FrameOutcome, GameState, Obstacle};
use crate::view::draw;
use crate::view::RenderSurface;

/// Owns the game state and the random source used for spawning, and runs
/// the per-frame advance-then-draw step for whichever host drives it.
pub struct GameLoop<R = StdRng> {
    state: GameState,
    rng: R,
}

impl GameLoop<StdRng> {
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameLoop<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle(&mut self, command: Command) {
        self.state.apply(command);
    }

    /// Spawn timer callback. Returns whether an obstacle was added; the random
    /// source is left untouched when the game is not running.
    pub fn spawn_tick(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let obstacle = Obstacle::spawn(self.state.config(), &mut self.rng);
        self.state.apply(Command::Spawn(obstacle));
        true
    }

    pub fn advance(&mut self) -> FrameOutcome {
        self.state.advance()
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, now_ms: f64) {
        draw::draw_frame(surface, &self.state, now_ms);
    }

    /// One scheduled frame: advance the state, then render it.
    pub fn frame<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> FrameOutcome {
        let outcome = self.advance();
        self.draw(surface, now_ms);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::view::draw::tests::{Call, Recorder};
    use rand::rngs::mock::StepRng;

    fn game() -> GameLoop<StepRng> {
        GameLoop::new(GameConfig::default(), StepRng::new(0, 0))
    }

    #[test]
    fn test_spawn_tick_only_while_running() {
        let mut game = game();
        assert!(!game.spawn_tick());
        assert!(game.state().obstacles().is_empty());

        game.handle(Command::Start);
        assert!(game.spawn_tick());
        assert_eq!(game.state().obstacles().len(), 1);
    }

    #[test]
    fn test_spawn_uses_injected_source() {
        // A zero source always picks the first lane and first color
        let mut game = game();
        game.handle(Command::Start);
        game.spawn_tick();
        let config = *game.state().config();
        let expected = Obstacle::in_lane(&config, 0, crate::model::ObstacleColor::Yellow);
        assert_eq!(game.state().obstacles()[0], expected);
    }

    #[test]
    fn test_frame_advances_then_draws() {
        let mut game = game();
        game.handle(Command::Start);
        let mut recorder = Recorder::default();

        let outcome = game.frame(&mut recorder, 0.0);
        assert_eq!(outcome, FrameOutcome::Advanced { score: 1, sped_up: false });
        assert_eq!(recorder.calls.last(), Some(&Call::Text("Score: 1".to_string())));
    }

    #[test]
    fn test_idle_frame_draws_without_advancing() {
        let mut game = game();
        let mut recorder = Recorder::default();
        assert_eq!(game.frame(&mut recorder, 0.0), FrameOutcome::Skipped);
        assert_eq!(game.state().status(), Status::Idle);
        assert!(!recorder.calls.is_empty());
    }
}
