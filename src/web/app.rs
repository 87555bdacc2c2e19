use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent};

use crate::config::GameConfig;
use crate::controller::input::wasm::{keyboard_event_to_input, touch_end_to_input, touch_start_to_input};
use crate::controller::{GameLoop, InputEvent, InputProcessor, SessionDriver, SessionHost};
use crate::error::GameError;
use crate::model::{Command, FrameOutcome};
use crate::view::Canvas2dSurface;
use crate::web::dom::Page;
use crate::web::handles::{AnimationLoop, EventListener, Interval, LoopControl};

/// Mounted game: page, state and the currently running session, if any.
pub struct App {
    core: Rc<AppCore>,
    _controls: Vec<EventListener>,
}

type WebDriver = SessionDriver<SessionInputs, AnimationLoop>;

struct AppCore {
    config: GameConfig,
    page: Page,
    surface: RefCell<Canvas2dSurface>,
    driver: RefCell<WebDriver>,
    input: RefCell<InputProcessor>,
}

/// Spawn timer and input listeners of one run.
struct SessionInputs {
    _spawn: Interval,
    _listeners: Vec<EventListener>,
}

/// Registers a run's browser callbacks, each holding only a weak ref to the core.
struct WebHost<'a>(&'a Rc<AppCore>);

impl App {
    pub fn mount(config: GameConfig) -> Result<Self, GameError> {
        let page = Page::mount(&config)?;
        let surface = Canvas2dSurface::from_canvas(&page.canvas)?;
        let driver = SessionDriver::new(GameLoop::from_entropy(config));

        let core = Rc::new(AppCore {
            config,
            page,
            surface: RefCell::new(surface),
            driver: RefCell::new(driver),
            input: RefCell::new(InputProcessor::new(&config)),
        });
        core.draw_now();

        let controls = vec![
            control(&core, &core.page.start_button, Command::Start)?,
            control(&core, &core.page.restart_button, Command::Restart)?,
        ];

        tracing::info!("lane dodger mounted ({}x{})", config.width, config.height);
        Ok(Self {
            core,
            _controls: controls,
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.core.driver.borrow_mut().teardown();
        tracing::info!("lane dodger torn down");
    }
}

fn control(
    core: &Rc<AppCore>,
    button: &web_sys::HtmlElement,
    command: Command,
) -> Result<EventListener, GameError> {
    let weak = Rc::downgrade(core);
    EventListener::new(button, "click", move |_e| {
        if let Some(core) = weak.upgrade() {
            if let Err(e) = core.begin(command.clone()) {
                tracing::error!("failed to start session: {e}");
            }
        }
    })
}

impl AppCore {
    fn draw_now(&self) {
        let mut surface = self.surface.borrow_mut();
        self.driver.borrow().draw(&mut *surface, js_sys::Date::now());
    }

    fn begin(self: &Rc<Self>, command: Command) -> Result<(), GameError> {
        let running = self.driver.borrow_mut().begin(&WebHost(self), command)?;
        if running {
            self.page.show_playing();
        }
        Ok(())
    }

    fn on_input(&self, event: &InputEvent) -> bool {
        let command = self.input.borrow_mut().translate(event);
        match command {
            Some(command) => {
                self.driver.borrow_mut().handle_input(command);
                true
            }
            None => false,
        }
    }

    fn on_frame(&self) -> LoopControl {
        let outcome = {
            let mut surface = self.surface.borrow_mut();
            self.driver.borrow_mut().frame(&mut *surface, js_sys::Date::now())
        };

        match outcome {
            FrameOutcome::Crashed { score } => {
                self.page.show_crash(score);
                LoopControl::Stop
            }
            FrameOutcome::Skipped => LoopControl::Stop,
            FrameOutcome::Advanced { .. } => LoopControl::Continue,
        }
    }
}

impl SessionHost for WebHost<'_> {
    type Inputs = SessionInputs;
    type Frames = AnimationLoop;

    fn open_inputs(&self) -> Result<SessionInputs, GameError> {
        let core = self.0;
        let window = &core.page.window;
        let canvas = &core.page.canvas;

        let keydown = {
            let weak = Rc::downgrade(core);
            EventListener::new(window, "keydown", move |e| {
                let (Some(core), Some(e)) = (weak.upgrade(), e.dyn_ref::<KeyboardEvent>()) else {
                    return;
                };
                if core.on_input(&keyboard_event_to_input(e)) {
                    e.prevent_default();
                }
            })?
        };

        let touch_start = {
            let weak = Rc::downgrade(core);
            EventListener::new(canvas, "touchstart", move |e| {
                with_touch(&weak, &e, touch_start_to_input);
            })?
        };

        let touch_move = EventListener::active(canvas, "touchmove", |e| e.prevent_default())?;

        let touch_end = {
            let weak = Rc::downgrade(core);
            EventListener::new(canvas, "touchend", move |e| {
                with_touch(&weak, &e, touch_end_to_input);
            })?
        };

        let spawn = {
            let weak = Rc::downgrade(core);
            Interval::new(window, core.config.spawn_interval_ms, move || {
                if let Some(core) = weak.upgrade() {
                    core.driver.borrow_mut().spawn_tick();
                }
            })?
        };

        Ok(SessionInputs {
            _spawn: spawn,
            _listeners: vec![keydown, touch_start, touch_move, touch_end],
        })
    }

    fn open_frames(&self) -> Result<AnimationLoop, GameError> {
        let weak = Rc::downgrade(self.0);
        AnimationLoop::start(&self.0.page.window, move |_timestamp| match weak.upgrade() {
            Some(core) => core.on_frame(),
            None => LoopControl::Stop,
        })
    }
}

fn with_touch(
    core: &Weak<AppCore>,
    event: &web_sys::Event,
    convert: fn(&TouchEvent) -> Option<InputEvent>,
) {
    let Some(core) = core.upgrade() else {
        return;
    };
    if let Some(input) = event.dyn_ref::<TouchEvent>().and_then(convert) {
        core.on_input(&input);
    }
}
