use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::GameError;
use crate::model::Rect;
use crate::view::surface::{Color, RenderSurface};

/// [`RenderSurface`] backed by a canvas 2D context.
#[derive(Clone)]
pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::NoRenderContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::NoRenderContext)?;
        Ok(Self { ctx })
    }
}

fn warn_on_err(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!("canvas {op} failed: {e:?}");
    }
}

impl RenderSurface for Canvas2dSurface {
    fn clear(&mut self, area: Rect) {
        self.ctx.clear_rect(area.x, area.y, area.w, area.h);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, dash: [f64; 2], color: Color) {
        let pattern = Array::of2(&JsValue::from_f64(dash[0]), &JsValue::from_f64(dash[1]));
        warn_on_err("setLineDash", self.ctx.set_line_dash(&pattern));
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
        warn_on_err("setLineDash", self.ctx.set_line_dash(&Array::new()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{size}px Arial"));
        warn_on_err("fillText", self.ctx.fill_text(text, x, y));
    }
}
