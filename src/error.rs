use thiserror::Error;

/// Failures while bringing up a host (page or window). Gameplay itself has no
/// error states; a crash is a normal game over.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("no global `window`")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("no body on document")]
    NoBody,
    #[error("canvas has no 2d rendering context")]
    NoRenderContext,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("GPU init failed: {0}")]
    Gpu(String),
    #[error("window creation failed: {0}")]
    Window(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GameError::Dom(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
