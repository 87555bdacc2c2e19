use lane_dodger::controller::GameLoop;
use lane_dodger::model::{
    step, Command, Direction, FrameOutcome, GameState, Obstacle, ObstacleColor, Status,
};
use lane_dodger::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn started() -> GameState {
    let mut state = GameState::new(GameConfig::default());
    state.apply(Command::Start);
    state
}

#[test]
fn test_speed_ramps_at_frame_500() {
    let mut state = started();
    let initial = state.speed();

    for _ in 0..499 {
        state.advance();
    }
    assert_eq!(state.score(), 499);
    assert_eq!(state.speed(), initial);

    assert_eq!(
        state.advance(),
        FrameOutcome::Advanced { score: 500, sped_up: true }
    );
    assert_eq!(state.score(), 500);
    assert_eq!(state.speed(), initial + state.config().speed_increment);
}

#[test]
fn test_obstacle_in_car_lane_crashes_on_first_overlap() {
    let mut state = started();
    let lane = state.car().lane();
    let obstacle = Obstacle::in_lane(state.config(), lane, ObstacleColor::Orange);
    assert_eq!(obstacle.y, -60.0);
    state.apply(Command::Spawn(obstacle));

    let mut frames = 0;
    let score = loop {
        frames += 1;
        match state.advance() {
            FrameOutcome::Crashed { score } => break score,
            FrameOutcome::Advanced { .. } => {
                // Still clear of the car's rows
                assert!(state.obstacles()[0].bounds().bottom() <= 500.0);
            }
            FrameOutcome::Skipped => panic!("running game skipped a frame"),
        }
    };

    // -60 + 4 * 126 = 444, bottom 504 is the first overlap with 500..580
    assert_eq!(frames, 126);
    assert_eq!(state.obstacles()[0].y, 444.0);
    assert_eq!(score, 125);
    assert_eq!(state.status(), Status::Crashed);
}

#[test]
fn test_dodging_avoids_crash() {
    let mut state = started();
    let obstacle = Obstacle::in_lane(state.config(), 1, ObstacleColor::Yellow);
    state.apply(Command::Spawn(obstacle));

    for _ in 0..100 {
        state.advance();
    }
    state.apply(Command::Steer(Direction::Left));
    for _ in 0..100 {
        assert!(matches!(state.advance(), FrameOutcome::Advanced { .. }));
    }
    assert!(state.obstacles().is_empty());
}

#[test]
fn test_restart_after_crash() {
    let state = started();
    let obstacle = Obstacle::in_lane(state.config(), 1, ObstacleColor::Purple);
    let (mut state, _) = step(state, [Command::Spawn(obstacle)]);
    while state.status() == Status::Running {
        state.advance();
    }
    assert!(state.score() > 0);

    let (state, outcome) = step(state, [Command::Restart]);
    assert_eq!(state.status(), Status::Running);
    assert_eq!(outcome, FrameOutcome::Advanced { score: 1, sped_up: false });
    assert!(state.obstacles().is_empty());
}

#[test]
fn test_seeded_session_is_reproducible() {
    fn run(seed: u64) -> (u64, Vec<Obstacle>) {
        let mut game = GameLoop::new(GameConfig::default(), StdRng::seed_from_u64(seed));
        game.handle(Command::Start);
        for frame in 0..2000 {
            // Roughly one spawn per 72 frames at 60 fps
            if frame % 72 == 0 {
                game.spawn_tick();
            }
            if let FrameOutcome::Crashed { .. } = game.advance() {
                break;
            }
        }
        (game.state().score(), game.state().obstacles().to_vec())
    }

    assert_eq!(run(3), run(3));
}
