use rand::Rng;

use crate::config::GameConfig;
use crate::model::Rect;

/// Obstacle palette; spawned obstacles pick one uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleColor {
    Yellow,
    Orange,
    Purple,
}

impl ObstacleColor {
    pub const ALL: [ObstacleColor; 3] = [
        ObstacleColor::Yellow,
        ObstacleColor::Orange,
        ObstacleColor::Purple,
    ];

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ObstacleColor::Yellow => [0xFF, 0xFF, 0x00],
            ObstacleColor::Orange => [0xFF, 0xA5, 0x00],
            ObstacleColor::Purple => [0x80, 0x00, 0x80],
        }
    }
}

/// A falling rectangle the car has to avoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: ObstacleColor,
}

impl Obstacle {
    /// New obstacle at the top of the playfield, centered in `lane`.
    pub fn in_lane(config: &GameConfig, lane: usize, color: ObstacleColor) -> Self {
        let lane = lane.min(config.last_lane());
        Self {
            x: config.lane_x(lane, config.obstacle_width),
            y: config.obstacle_start_y,
            w: config.obstacle_width,
            h: config.obstacle_height,
            color,
        }
    }

    /// Random lane and color, both uniform.
    pub fn spawn<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let lane = rng.gen_range(0..config.lane_count.max(1));
        let color = ObstacleColor::ALL[rng.gen_range(0..ObstacleColor::ALL.len())];
        Self::in_lane(config, lane, color)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn fall(&mut self, speed: f64) {
        self.y += speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_in_lane_starts_above_playfield() {
        let config = GameConfig::default();
        let o = Obstacle::in_lane(&config, 2, ObstacleColor::Orange);
        assert_eq!(o.y, -60.0);
        assert_eq!(o.w, config.car_width);
        assert_eq!(o.h, 60.0);
        assert_eq!(o.x, config.lane_x(2, 50.0));
    }

    #[test]
    fn test_in_lane_clamps_lane() {
        let config = GameConfig::default();
        let o = Obstacle::in_lane(&config, 7, ObstacleColor::Yellow);
        assert_eq!(o.x, config.lane_x(2, 50.0));
    }

    #[test]
    fn test_spawn_covers_lanes_and_palette() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut xs = HashSet::new();
        let mut colors = HashSet::new();

        for _ in 0..200 {
            let o = Obstacle::spawn(&config, &mut rng);
            xs.insert(o.x.to_bits());
            colors.insert(o.color);
            assert_eq!(o.y, config.obstacle_start_y);
        }

        assert_eq!(xs.len(), 3, "every lane should be used");
        assert_eq!(colors.len(), 3, "every palette color should be used");
    }

    #[test]
    fn test_spawn_is_deterministic_for_seed() {
        let config = GameConfig::default();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(Obstacle::spawn(&config, &mut a), Obstacle::spawn(&config, &mut b));
        }
    }

    #[test]
    fn test_fall_moves_down_by_speed() {
        let mut o = Obstacle::in_lane(&GameConfig::default(), 0, ObstacleColor::Purple);
        o.fall(4.5);
        assert_eq!(o.y, -55.5);
    }
}
