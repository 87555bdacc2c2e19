use crate::config::GameConfig;
use crate::model::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player's car. Only the lane changes; x is derived from it and y is fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    lane: usize,
    last_lane: usize,
    x_by_lane: Vec<f64>,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Car {
    pub fn new(config: &GameConfig) -> Self {
        let x_by_lane = (0..config.lane_count)
            .map(|lane| config.lane_x(lane, config.car_width))
            .collect();
        Self {
            lane: config.start_lane.min(config.last_lane()),
            last_lane: config.last_lane(),
            x_by_lane,
            y: config.car_y,
            width: config.car_width,
            height: config.car_height,
        }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn x(&self) -> f64 {
        self.x_by_lane.get(self.lane).copied().unwrap_or(0.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x(), self.y, self.width, self.height)
    }

    /// Move one lane over, clamped to the road. Returns whether the lane changed.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Left => self.lane.saturating_sub(1),
            Direction::Right => (self.lane + 1).min(self.last_lane),
        };
        let changed = target != self.lane;
        self.lane = target;
        changed
    }
}
