use crate::config::GameConfig;
use crate::model::{Car, GameState, Obstacle, Rect};
use crate::view::surface::{car_hue, Color, RenderSurface};

const LANE_LINE_WIDTH: f64 = 2.0;
const LANE_DASH: [f64; 2] = [20.0, 15.0];
const SCORE_FONT_SIZE: f64 = 20.0;

/// Road background plus dashed dividers between lanes.
pub fn draw_road<S: RenderSurface + ?Sized>(surface: &mut S, config: &GameConfig) {
    surface.fill_rect(Rect::new(0.0, 0.0, config.width, config.height), Color::ROAD);

    let lane_width = config.lane_width();
    for lane in 1..config.lane_count {
        let x = lane as f64 * lane_width;
        surface.dashed_line((x, 0.0), (x, config.height), LANE_LINE_WIDTH, LANE_DASH, Color::WHITE);
    }
}

pub fn draw_car<S: RenderSurface + ?Sized>(surface: &mut S, car: &Car, now_ms: f64) {
    let color = Color::from_hsl(car_hue(now_ms), 1.0, 0.5);
    surface.fill_rect(car.bounds(), color);
}

pub fn draw_obstacles<S: RenderSurface + ?Sized>(surface: &mut S, obstacles: &[Obstacle]) {
    for obstacle in obstacles {
        surface.fill_rect(obstacle.bounds(), obstacle.color.into());
    }
}

pub fn draw_score<S: RenderSurface + ?Sized>(surface: &mut S, score: u64) {
    surface.fill_text(&format!("Score: {score}"), 10.0, 25.0, SCORE_FONT_SIZE, Color::WHITE);
}

/// Render one frame: clear, road, car, obstacles, score.
pub fn draw_frame<S: RenderSurface + ?Sized>(surface: &mut S, state: &GameState, now_ms: f64) {
    let config = state.config();
    surface.clear(Rect::new(0.0, 0.0, config.width, config.height));
    draw_road(surface, config);
    draw_car(surface, state.car(), now_ms);
    draw_obstacles(surface, state.obstacles());
    draw_score(surface, state.score());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{Command, ObstacleColor};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Clear(Rect),
        Fill(Rect, Color),
        Dashed { x: f64 },
        Text(String),
    }

    /// Records every draw call in order.
    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Call>,
    }

    impl RenderSurface for Recorder {
        fn clear(&mut self, area: Rect) {
            self.calls.push(Call::Clear(area));
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(Call::Fill(rect, color));
        }
        fn dashed_line(&mut self, from: (f64, f64), _to: (f64, f64), _width: f64, _dash: [f64; 2], _color: Color) {
            self.calls.push(Call::Dashed { x: from.0 });
        }
        fn fill_text(&mut self, text: &str, _x: f64, _y: f64, _size: f64, _color: Color) {
            self.calls.push(Call::Text(text.to_string()));
        }
    }

    #[test]
    fn test_frame_draw_order() {
        let mut state = GameState::default();
        state.apply(Command::Start);
        let obstacle = Obstacle::in_lane(state.config(), 0, ObstacleColor::Purple);
        state.apply(Command::Spawn(obstacle));

        let mut recorder = Recorder::default();
        draw_frame(&mut recorder, &state, 0.0);

        let calls = recorder.calls;
        assert_eq!(calls.len(), 7);
        assert!(matches!(calls[0], Call::Clear(_)));
        assert_eq!(calls[1], Call::Fill(Rect::new(0.0, 0.0, 400.0, 600.0), Color::ROAD));
        assert!(matches!(calls[2], Call::Dashed { .. }));
        assert!(matches!(calls[3], Call::Dashed { .. }));
        assert_eq!(calls[4], Call::Fill(state.car().bounds(), Color::rgb(255, 0, 0)));
        assert_eq!(calls[5], Call::Fill(obstacle.bounds(), ObstacleColor::Purple.into()));
        assert_eq!(calls[6], Call::Text("Score: 0".to_string()));
    }

    #[test]
    fn test_lane_dividers_between_lanes() {
        let config = GameConfig::default();
        let mut recorder = Recorder::default();
        draw_road(&mut recorder, &config);

        let xs: Vec<f64> = recorder
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Dashed { x } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![400.0 / 3.0, 800.0 / 3.0]);
    }
}
