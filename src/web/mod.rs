// WEB: DOM page, browser callbacks and app lifecycle
pub mod app;
pub mod dom;
pub mod handles;

pub use app::App;

use std::cell::RefCell;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Keep `app` alive until [`uninstall`]; replaces (and tears down) any previous one.
pub fn install(app: App) {
    let previous = APP.with(|slot| slot.borrow_mut().replace(app));
    drop(previous);
}

/// Tear down the installed app. Returns false if nothing was mounted.
pub fn uninstall() -> bool {
    let app = APP.with(|slot| slot.borrow_mut().take());
    app.is_some()
}
