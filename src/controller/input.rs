/// Platform-agnostic input handling system
use crate::config::{GameConfig, KeyBindings};
use crate::model::{Command, Direction};

/// Platform-independent input events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
}

/// Tracks a single touch gesture and turns it into a lane change once the
/// finger has travelled further than the threshold.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn end(&mut self, x: f64) -> Option<Direction> {
        let delta = x - self.start_x.take()?;
        if delta > self.threshold {
            Some(Direction::Right)
        } else if delta < -self.threshold {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

/// Turns raw key and touch events into steering commands.
#[derive(Clone)]
pub struct InputProcessor {
    keys: KeyBindings,
    swipe: SwipeTracker,
}

impl InputProcessor {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            keys: config.keys,
            swipe: SwipeTracker::new(config.swipe_threshold),
        }
    }

    pub fn direction_for_key(&self, key: &str) -> Option<Direction> {
        if key == self.keys.left {
            Some(Direction::Left)
        } else if key == self.keys.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Translate an event into a game command, if it maps to one.
    pub fn translate(&mut self, event: &InputEvent) -> Option<Command> {
        match event {
            InputEvent::KeyDown(key) => self.direction_for_key(key).map(Command::Steer),
            InputEvent::TouchStart { x } => {
                self.swipe.begin(*x);
                None
            }
            InputEvent::TouchEnd { x } => self.swipe.end(*x).map(Command::Steer),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use super::*;
    use web_sys::{KeyboardEvent, TouchEvent};

    pub fn keyboard_event_to_input(e: &KeyboardEvent) -> InputEvent {
        InputEvent::KeyDown(e.key())
    }

    pub fn touch_start_to_input(e: &TouchEvent) -> Option<InputEvent> {
        let touch = e.touches().get(0)?;
        Some(InputEvent::TouchStart { x: touch.client_x() as f64 })
    }

    pub fn touch_end_to_input(e: &TouchEvent) -> Option<InputEvent> {
        let touch = e.changed_touches().get(0)?;
        Some(InputEvent::TouchEnd { x: touch.client_x() as f64 })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    use super::*;
    use winit::event::{Touch, TouchPhase};
    use winit::keyboard::{Key, NamedKey};

    /// Logical key in the browser's `KeyboardEvent.key` naming, so one set of
    /// bindings serves both hosts.
    pub fn key_to_input(key: &Key) -> Option<InputEvent> {
        let name = match key {
            Key::Named(NamedKey::ArrowLeft) => "ArrowLeft",
            Key::Named(NamedKey::ArrowRight) => "ArrowRight",
            Key::Character(c) => c.as_str(),
            _ => return None,
        };
        Some(InputEvent::KeyDown(name.to_string()))
    }

    /// `scale` converts physical pixels to logical canvas units.
    pub fn touch_to_input(touch: &Touch, scale: f64) -> Option<InputEvent> {
        let x = touch.location.x / scale;
        match touch.phase {
            TouchPhase::Started => Some(InputEvent::TouchStart { x }),
            TouchPhase::Ended => Some(InputEvent::TouchEnd { x }),
            _ => None,
        }
    }
}
