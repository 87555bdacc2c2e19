use rand::rngs::StdRng;
use rand::Rng;

use crate::controller::GameLoop;
use crate::error::GameError;
use crate::model::{Command, FrameOutcome};
use crate::view::RenderSurface;

/// Registers the callbacks a running game needs with its host. Each returned
/// handle unregisters itself on drop.
pub trait SessionHost {
    /// Spawn timer and input listeners.
    type Inputs;
    /// Per-frame callback.
    type Frames;

    fn open_inputs(&self) -> Result<Self::Inputs, GameError>;
    fn open_frames(&self) -> Result<Self::Frames, GameError>;
}

struct Session<I, F> {
    inputs: Option<I>,
    _frames: F,
}

/// A [`GameLoop`] plus the host registrations of the run in progress.
///
/// Every exit path drops what the run registered: a crash releases the
/// inputs from inside the frame that detected it, `begin` drops the previous
/// run before opening the next, and `teardown` drops everything.
pub struct SessionDriver<I, F, R = StdRng> {
    game: GameLoop<R>,
    session: Option<Session<I, F>>,
}

impl<I, F, R: Rng> SessionDriver<I, F, R> {
    pub fn new(game: GameLoop<R>) -> Self {
        Self {
            game,
            session: None,
        }
    }

    pub fn game(&self) -> &GameLoop<R> {
        &self.game
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the current run still has its spawn timer and listeners.
    pub fn accepts_input(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.inputs.is_some())
    }

    /// Apply a start or restart command. Returns whether a run is now active.
    pub fn begin<H>(&mut self, host: &H, command: Command) -> Result<bool, GameError>
    where
        H: SessionHost<Inputs = I, Frames = F>,
    {
        self.teardown();

        self.game.handle(command);
        if !self.game.state().is_running() {
            return Ok(false);
        }

        let inputs = host.open_inputs()?;
        let frames = host.open_frames()?;
        self.session = Some(Session {
            inputs: Some(inputs),
            _frames: frames,
        });
        tracing::debug!("session opened");
        Ok(true)
    }

    pub fn handle_input(&mut self, command: Command) {
        self.game.handle(command);
    }

    pub fn spawn_tick(&mut self) -> bool {
        self.game.spawn_tick()
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, now_ms: f64) {
        self.game.draw(surface, now_ms);
    }

    /// One scheduled frame. On a crash the inputs are dropped before this
    /// returns; the frame registration stays until `begin` or `teardown`.
    pub fn frame<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> FrameOutcome {
        let outcome = self.game.frame(surface, now_ms);
        if let FrameOutcome::Crashed { score } = outcome {
            if let Some(session) = self.session.as_mut() {
                session.inputs.take();
            }
            tracing::info!(score, "crashed, inputs released");
        }
        outcome
    }

    pub fn teardown(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("session closed");
        }
    }
}
