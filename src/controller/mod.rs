// CONTROLLER: Input, spawning, sessions and the update loop
pub mod input;
pub mod spawn_clock;
pub mod frame_loop;
pub mod polled_loop;
pub mod session;

pub use input::{InputEvent, InputProcessor, SwipeTracker};
pub use spawn_clock::SpawnClock;
pub use frame_loop::GameLoop;
pub use polled_loop::PolledLoop;
pub use session::{SessionDriver, SessionHost};
