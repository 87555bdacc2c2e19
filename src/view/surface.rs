use crate::model::{ObstacleColor, Rect};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const ROAD: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 204);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// HSL to RGB; `hue` in degrees, `saturation` and `lightness` in 0..=1.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h_prime as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(to_u8(r1), to_u8(g1), to_u8(b1))
    }

    /// CSS color string for canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

impl From<ObstacleColor> for Color {
    fn from(color: ObstacleColor) -> Self {
        let [r, g, b] = color.rgb();
        Color::rgb(r, g, b)
    }
}

/// Car hue in degrees, cycling once every 1.8 seconds.
pub fn car_hue(now_ms: f64) -> f64 {
    (now_ms / 5.0).rem_euclid(360.0)
}

/// 2D raster target the drawing routines write to.
pub trait RenderSurface {
    fn clear(&mut self, area: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, dash: [f64; 2], color: Color);
    /// `y` is the text baseline.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color);
}
