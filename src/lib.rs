// Re-export all public modules so they can be used from main.rs
pub mod config;
pub mod error;
pub mod logging;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

#[cfg(not(target_arch = "wasm32"))]
pub mod ui;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GameConfig;
pub use error::GameError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();
    let app = web::App::mount(GameConfig::default()).map_err(|e| {
        tracing::error!("initialization aborted: {e}");
        e
    })?;
    web::install(app);
    Ok(())
}

/// Cancel every callback the game registered and remove it from the page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    if !web::uninstall() {
        tracing::debug!("teardown called with nothing mounted");
    }
}
