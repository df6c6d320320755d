//! Plain-data snapshot handed to a renderer after each tick

use glam::Vec2;
use serde::Serialize;

use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub ball: BallView,
    pub paddle: RectView,
    /// Surviving bricks only
    pub bricks: Vec<RectView>,
}

impl GameState {
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.time_ticks,
            ball: BallView {
                position: self.ball.pos,
                radius: self.ball.radius,
            },
            paddle: RectView {
                position: self.paddle.pos,
                width: self.paddle.width,
                height: self.paddle.height,
            },
            bricks: self
                .bricks
                .iter()
                .map(|b| RectView {
                    position: b.pos,
                    width: b.width,
                    height: b.height,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_frame_mirrors_state() {
        let state = GameState::new(&Config::default());
        let frame = state.frame();
        assert_eq!(frame.tick, 0);
        assert_eq!(frame.ball.position, state.ball.pos);
        assert_eq!(frame.ball.radius, 10.0);
        assert_eq!(frame.paddle.width, 60.0);
        assert_eq!(frame.paddle.height, 20.0);
        assert_eq!(frame.bricks.len(), 44);
        assert_eq!(frame.bricks[0].position, state.bricks[0].pos);
    }

    #[test]
    fn test_frame_omits_destroyed_bricks() {
        let mut state = GameState::new(&Config::default());
        let mut destroyed = 0;
        while destroyed == 0 {
            destroyed = tick(&mut state, &TickInput::default()).bricks_destroyed();
        }
        assert_eq!(state.frame().bricks.len(), 44 - destroyed);
    }

    #[test]
    fn test_frame_serializes_to_json() {
        let frame = GameState::new(&Config::default()).frame();
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["tick"], 0);
        assert_eq!(json["ball"]["radius"], 10.0);
        assert_eq!(json["bricks"].as_array().map(|b| b.len()), Some(44));
    }
}
