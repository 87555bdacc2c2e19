use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::controller::{GameLoop, SpawnClock};
use crate::model::{Command, FrameOutcome, GameState};

/// Game loop for hosts that poll elapsed time once per redraw instead of
/// registering timer callbacks. The spawn clock only runs during a run and
/// restarts from zero on every start, restart and crash.
pub struct PolledLoop<R = StdRng> {
    game: GameLoop<R>,
    spawn_clock: SpawnClock,
}

impl PolledLoop<StdRng> {
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(GameLoop::from_entropy(config))
    }
}

impl<R: Rng> PolledLoop<R> {
    pub fn new(game: GameLoop<R>) -> Self {
        let spawn_clock = SpawnClock::new(game.state().config().spawn_interval_ms);
        Self { game, spawn_clock }
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn spawn_clock(&self) -> &SpawnClock {
        &self.spawn_clock
    }

    /// Start or restart from a UI control.
    pub fn begin(&mut self, command: Command) {
        self.game.handle(command);
        self.spawn_clock.reset();
    }

    pub fn handle_input(&mut self, command: Command) {
        self.game.handle(command);
    }

    pub fn update(&mut self, dt_ms: f64) -> FrameOutcome {
        if self.game.state().is_running() {
            for _ in 0..self.spawn_clock.tick(dt_ms) {
                self.game.spawn_tick();
            }
        }

        let outcome = self.game.advance();
        if let FrameOutcome::Crashed { score } = outcome {
            self.spawn_clock.reset();
            tracing::info!(score, "run over, waiting for restart");
        }
        outcome
    }
}
