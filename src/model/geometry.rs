/// Axis-aligned rectangle in canvas units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// True when the interiors overlap on both axes. Rectangles that only
    /// share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAR: Rect = Rect::new(175.0, 500.0, 50.0, 80.0);

    #[test]
    fn test_overlap_on_both_axes() {
        assert!(CAR.intersects(&Rect::new(175.0, 450.0, 50.0, 60.0)));
        assert!(CAR.intersects(&Rect::new(200.0, 570.0, 50.0, 60.0)));
        // Symmetric
        assert!(Rect::new(200.0, 570.0, 50.0, 60.0).intersects(&CAR));
    }

    #[test]
    fn test_no_overlap_beside_or_below() {
        // Same rows, other lane
        assert!(!CAR.intersects(&Rect::new(41.0, 500.0, 50.0, 60.0)));
        // Same lane, fully below
        assert!(!CAR.intersects(&Rect::new(175.0, 600.0, 50.0, 60.0)));
        // Same lane, fully above
        assert!(!CAR.intersects(&Rect::new(175.0, 300.0, 50.0, 60.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Obstacle bottom exactly at car top
        assert!(!CAR.intersects(&Rect::new(175.0, 440.0, 50.0, 60.0)));
        // Obstacle left edge exactly at car right
        assert!(!CAR.intersects(&Rect::new(225.0, 500.0, 50.0, 60.0)));
    }
}
