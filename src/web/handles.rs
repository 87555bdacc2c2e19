//! Session-scoped browser callbacks. Each handle owns its closure and
//! unregisters it on drop, so releasing a handle is all it takes to stop it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, Window};

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop that reschedules itself until the tick
/// returns [`LoopControl::Stop`] or the handle is dropped.
pub struct AnimationLoop {
    window: Window,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(
        window: &Window,
        mut tick: impl FnMut(f64) -> LoopControl + 'static,
    ) -> Result<Self, GameError> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let weak_callback = Rc::downgrade(&callback);
        let pending_in_frame = pending.clone();
        let window_for_loop = window.clone();

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_in_frame.set(None);
            if tick(timestamp) == LoopControl::Stop {
                return;
            }

            // Reschedule through a weak ref so the closure does not keep itself alive
            let Some(callback) = weak_callback.upgrade() else {
                return;
            };
            let callback = callback.borrow();
            if let Some(closure) = callback.as_ref() {
                match window_for_loop.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => pending_in_frame.set(Some(id)),
                    Err(e) => tracing::warn!("requestAnimationFrame failed, loop stopped: {e:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = {
            let first = callback.borrow();
            let closure = first.as_ref().ok_or(GameError::Dom("frame callback missing".into()))?;
            window.request_animation_frame(closure.as_ref().unchecked_ref())?
        };
        pending.set(Some(id));

        Ok(Self {
            window: window.clone(),
            callback,
            pending,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                tracing::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
        self.callback.borrow_mut().take();
    }
}

/// `setInterval` registration, cleared on drop.
pub struct Interval {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(window: &Window, period_ms: u32, f: impl FnMut() + 'static) -> Result<Self, GameError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;
        Ok(Self {
            window: window.clone(),
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// DOM event listener, removed on drop.
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, GameError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Non-passive registration, needed for handlers that call `preventDefault`
    /// on touch scrolling.
    pub fn active(
        target: &EventTarget,
        kind: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, GameError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("removing {} listener failed: {e:?}", self.kind);
        }
    }
}
