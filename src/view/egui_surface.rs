use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};

use crate::model::Rect;
use crate::view::surface::{Color, RenderSurface};

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

/// [`RenderSurface`] that paints into an egui layer. One canvas unit maps to
/// one egui point, offset by the painter's clip origin.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self {
            painter,
            origin: painter.clip_rect().min,
        }
    }

    fn pos(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(self.origin.x + x as f32, self.origin.y + y as f32)
    }

    fn rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.pos(rect.x, rect.y),
            egui::vec2(rect.w as f32, rect.h as f32),
        )
    }
}

impl RenderSurface for EguiSurface<'_> {
    fn clear(&mut self, area: Rect) {
        self.painter.rect_filled(self.rect(area), 0.0, Color32::BLACK);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.painter.rect_filled(self.rect(rect), 0.0, Color32::from(color));
    }

    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, dash: [f64; 2], color: Color) {
        let points = [self.pos(from.0, from.1), self.pos(to.0, to.1)];
        let stroke = Stroke::new(width as f32, Color32::from(color));
        self.painter
            .extend(Shape::dashed_line(&points, stroke, dash[0] as f32, dash[1] as f32));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        self.painter.text(
            self.pos(x, y),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size as f32),
            Color32::from(color),
        );
    }
}
