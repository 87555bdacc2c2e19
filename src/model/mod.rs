// MODEL: Game state and data
pub mod geometry;
pub mod car;
pub mod obstacle;
pub mod game_state;

pub use geometry::Rect;
pub use car::{Car, Direction};
pub use obstacle::{Obstacle, ObstacleColor};
pub use game_state::{step, Command, FrameOutcome, GameState, Status};
