use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::config::GameConfig;
use crate::error::GameError;

const ROOT_STYLE: &str = "display:flex;justify-content:center;align-items:center;\
    height:100vh;flex-direction:column;position:relative;";
const CANVAS_STYLE: &str = "border:2px solid white;touch-action:none;";
const START_STYLE: &str = "position:absolute;padding:20px 40px;font-size:24px;\
    background-color:red;color:white;border-radius:10px;cursor:pointer;z-index:10;";
const OVERLAY_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
    background-color:rgba(0,0,0,0.8);display:none;flex-direction:column;\
    justify-content:center;align-items:center;color:white;font-size:24px;z-index:20;";
const RESTART_STYLE: &str = "margin-top:20px;padding:10px 20px;font-size:20px;\
    background-color:red;border-radius:8px;cursor:pointer;";

/// The game's DOM subtree: canvas, start control and crash overlay.
/// Removed from the document on drop.
pub struct Page {
    pub window: Window,
    root: HtmlElement,
    pub canvas: HtmlCanvasElement,
    pub start_button: HtmlElement,
    overlay: HtmlElement,
    overlay_text: HtmlElement,
    pub restart_button: HtmlElement,
}

fn create(document: &Document, tag: &str, style: &str) -> Result<HtmlElement, GameError> {
    let el = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GameError::Dom(format!("<{tag}> is not an HtmlElement")))?;
    el.set_attribute("style", style)?;
    Ok(el)
}

impl Page {
    pub fn mount(config: &GameConfig) -> Result<Self, GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoDocument)?;
        let body = document.body().ok_or(GameError::NoBody)?;

        let root = create(&document, "div", ROOT_STYLE)?;

        let start_button = create(&document, "button", START_STYLE)?;
        start_button.set_text_content(Some("Play"));

        let canvas = create(&document, "canvas", CANVAS_STYLE)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GameError::Dom("failed to create canvas".into()))?;
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let overlay = create(&document, "div", OVERLAY_STYLE)?;
        let overlay_text = create(&document, "p", "")?;
        let restart_button = create(&document, "button", RESTART_STYLE)?;
        restart_button.set_text_content(Some("Restart"));
        overlay.append_child(&overlay_text)?;
        overlay.append_child(&restart_button)?;

        root.append_child(&start_button)?;
        root.append_child(&canvas)?;
        root.append_child(&overlay)?;
        body.append_child(&root)?;

        Ok(Self {
            window,
            root,
            canvas,
            start_button,
            overlay,
            overlay_text,
            restart_button,
        })
    }

    fn set_display(el: &HtmlElement, value: &str) {
        if let Err(e) = el.style().set_property("display", value) {
            tracing::warn!("failed to set display: {e:?}");
        }
    }

    /// Hide the start control and the crash overlay while a run is active.
    pub fn show_playing(&self) {
        Self::set_display(&self.start_button, "none");
        Self::set_display(&self.overlay, "none");
    }

    pub fn show_crash(&self, score: u64) {
        self.overlay_text
            .set_text_content(Some(&format!("CRASH! Your Score: {score}")));
        Self::set_display(&self.overlay, "flex");
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
    }
}
