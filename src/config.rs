/// Steering keys, matched against `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: &'static str,
    pub right: &'static str,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft",
            right: "ArrowRight",
        }
    }
}

/// Tunable constants for a game session.
///
/// All lengths are in logical canvas units. The playfield is `width` × `height`
/// and the road spans `road_width`, split into `lane_count` equal lanes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub road_width: f64,
    pub lane_count: usize,
    pub start_lane: usize,

    pub car_width: f64,
    pub car_height: f64,
    pub car_y: f64,

    pub obstacle_width: f64,
    pub obstacle_height: f64,
    pub obstacle_start_y: f64,

    pub initial_speed: f64,
    pub speed_increment: f64,
    /// Speed goes up whenever the score is an exact multiple of this.
    pub speed_ramp_every: u64,

    pub spawn_interval_ms: u32,
    /// Horizontal touch travel that must be exceeded to count as a swipe.
    pub swipe_threshold: f64,
    pub keys: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            road_width: 400.0,
            lane_count: 3,
            start_lane: 1,
            car_width: 50.0,
            car_height: 80.0,
            car_y: 500.0,
            obstacle_width: 50.0,
            obstacle_height: 60.0,
            obstacle_start_y: -60.0,
            initial_speed: 4.0,
            speed_increment: 0.5,
            speed_ramp_every: 500,
            spawn_interval_ms: 1200,
            swipe_threshold: 30.0,
            keys: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    pub fn lane_width(&self) -> f64 {
        self.road_width / self.lane_count as f64
    }

    /// Left edge of an object of `object_width` centered in `lane`.
    pub fn lane_x(&self, lane: usize, object_width: f64) -> f64 {
        let lane_width = self.lane_width();
        lane as f64 * lane_width + (lane_width - object_width) / 2.0
    }

    pub fn last_lane(&self) -> usize {
        self.lane_count.saturating_sub(1)
    }
}
