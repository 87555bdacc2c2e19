use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::model::{Car, Direction, Obstacle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Crashed,
}

/// Everything that can change the game from outside the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Restart,
    Steer(Direction),
    Spawn(Obstacle),
}

/// Result of one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Not running; nothing moved.
    Skipped,
    Advanced { score: u64, sped_up: bool },
    Crashed { score: u64 },
}

/// Authoritative game state. Mutated only through [`GameState::apply`] and
/// [`GameState::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    car: Car,
    obstacles: Vec<Obstacle>,
    score: u64,
    speed: f64,
    status: Status,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            car: Car::new(&config),
            obstacles: Vec::new(),
            score: 0,
            speed: config.initial_speed,
            status: Status::Idle,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Apply a command immediately. Steering and spawning only take effect
    /// while running; `Start` only from idle; `Restart` always resets.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => {
                if self.status == Status::Idle {
                    self.status = Status::Running;
                    info!("game started");
                }
            }
            Command::Restart => {
                *self = GameState::new(self.config);
                self.status = Status::Running;
                info!("game restarted");
            }
            Command::Steer(direction) => {
                if self.is_running() && self.car.steer(direction) {
                    trace!(lane = self.car.lane(), "car changed lane");
                }
            }
            Command::Spawn(obstacle) => {
                if self.is_running() {
                    trace!(x = obstacle.x, color = ?obstacle.color, "obstacle spawned");
                    self.obstacles.push(obstacle);
                }
            }
        }
    }

    /// Advance one frame: move every obstacle, check it against the car, drop
    /// the ones below the playfield, then either crash or bump the score.
    pub fn advance(&mut self) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Skipped;
        }

        let car = self.car.bounds();
        let speed = self.speed;
        let mut crashed = false;
        for obstacle in self.obstacles.iter_mut() {
            obstacle.fall(speed);
            crashed |= obstacle.bounds().intersects(&car);
        }

        let height = self.config.height;
        self.obstacles.retain(|o| o.y < height);

        if crashed {
            self.status = Status::Crashed;
            info!(score = self.score, "crashed");
            return FrameOutcome::Crashed { score: self.score };
        }

        self.score += 1;
        // Exact multiple check: relies on the score moving by one per frame.
        let sped_up = self.config.speed_ramp_every > 0
            && self.score % self.config.speed_ramp_every == 0;
        if sped_up {
            self.speed += self.config.speed_increment;
            debug!(score = self.score, speed = self.speed, "speed increased");
        }

        FrameOutcome::Advanced {
            score: self.score,
            sped_up,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(GameConfig::default())
    }
}

/// Functional form of a frame: apply `commands` in order, then advance once.
pub fn step<I>(mut state: GameState, commands: I) -> (GameState, FrameOutcome)
where
    I: IntoIterator<Item = Command>,
{
    for command in commands {
        state.apply(command);
    }
    let outcome = state.advance();
    (state, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObstacleColor;

    fn running() -> GameState {
        let mut state = GameState::default();
        state.apply(Command::Start);
        state
    }

    fn obstacle_in(state: &GameState, lane: usize) -> Obstacle {
        Obstacle::in_lane(state.config(), lane, ObstacleColor::Yellow)
    }

    #[test]
    fn test_idle_does_not_advance() {
        let mut state = GameState::default();
        assert_eq!(state.advance(), FrameOutcome::Skipped);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn test_idle_ignores_steer_and_spawn() {
        let mut state = GameState::default();
        let spawned = obstacle_in(&state, 0);
        state.apply(Command::Steer(Direction::Left));
        state.apply(Command::Spawn(spawned));
        assert_eq!(state.car().lane(), 1);
        assert!(state.obstacles().is_empty());
    }

    #[test]
    fn test_score_increments_once_per_frame() {
        let mut state = running();
        for frame in 1..=10 {
            assert_eq!(
                state.advance(),
                FrameOutcome::Advanced { score: frame, sped_up: false }
            );
        }
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_obstacles_fall_by_speed() {
        let mut state = running();
        let spawned = obstacle_in(&state, 0);
        state.apply(Command::Spawn(spawned));

        let mut last_y = state.obstacles()[0].y;
        for _ in 0..50 {
            let speed = state.speed();
            state.advance();
            let y = state.obstacles()[0].y;
            assert_eq!(y, last_y + speed);
            last_y = y;
        }
    }

    #[test]
    fn test_offscreen_obstacles_are_dropped() {
        let mut state = running();
        let spawned = obstacle_in(&state, 0);
        state.apply(Command::Spawn(spawned));

        // -60 + 4 * 165 = 600 reaches the bottom edge
        for _ in 0..164 {
            state.advance();
        }
        assert_eq!(state.obstacles().len(), 1);
        state.advance();
        assert!(state.obstacles().is_empty());
        assert!(state.is_running(), "obstacle in another lane never hits the car");
    }

    #[test]
    fn test_speed_ramps_exactly_at_multiples() {
        let mut state = running();
        let initial = state.speed();
        let mut ramps = 0;
        for _ in 0..1500 {
            if let FrameOutcome::Advanced { sped_up: true, score } = state.advance() {
                assert_eq!(score % 500, 0);
                ramps += 1;
            }
        }
        assert_eq!(ramps, 3);
        assert_eq!(state.speed(), initial + 3.0 * 0.5);
    }

    #[test]
    fn test_crash_freezes_state() {
        let mut state = running();
        let spawned = obstacle_in(&state, 1);
        state.apply(Command::Spawn(spawned));

        let score = loop {
            if let FrameOutcome::Crashed { score } = state.advance() {
                break score;
            }
        };
        assert_eq!(state.status(), Status::Crashed);

        let frozen = state.clone();
        assert_eq!(state.advance(), FrameOutcome::Skipped);
        state.apply(Command::Steer(Direction::Left));
        let late = obstacle_in(&state, 0);
        state.apply(Command::Spawn(late));
        state.apply(Command::Start);
        assert_eq!(state, frozen);
        assert_eq!(state.score(), score);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = running();
        state.apply(Command::Steer(Direction::Right));
        let spawned = obstacle_in(&state, 2);
        state.apply(Command::Spawn(spawned));
        while state.is_running() {
            state.advance();
        }

        state.apply(Command::Restart);
        assert_eq!(state.status(), Status::Running);
        assert_eq!(state.score(), 0);
        assert!(state.obstacles().is_empty());
        assert_eq!(state.car().lane(), 1);
        assert_eq!(state.speed(), state.config().initial_speed);
    }

    #[test]
    fn test_step_applies_then_advances() {
        let state = running();
        let (state, outcome) = step(state, [Command::Steer(Direction::Left)]);
        assert_eq!(state.car().lane(), 0);
        assert_eq!(outcome, FrameOutcome::Advanced { score: 1, sped_up: false });
    }
}
