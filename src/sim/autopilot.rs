//! Idle/demo mode - steers the paddle under the ball

use super::geometry::Edges;
use super::state::GameState;
use super::tick::TickInput;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Horizontal distance from the paddle centre the ball may drift before the paddle reacts
    pub dead_zone: f32,
    /// Request quit once every brick is gone
    pub quit_when_cleared: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            dead_zone: 4.0,
            quit_when_cleared: true,
        }
    }
}

impl Autopilot {
    pub fn input(&self, state: &GameState) -> TickInput {
        let offset = state.ball.x() - state.paddle.x();
        TickInput {
            move_left: offset < -self.dead_zone,
            move_right: offset > self.dead_zone,
            quit: self.quit_when_cleared && state.is_cleared(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_follows_ball() {
        let pilot = Autopilot::default();
        let mut state = GameState::new(&Config::default());

        state.ball.pos.x = 200.0;
        let input = pilot.input(&state);
        assert!(input.move_left && !input.move_right);

        state.ball.pos.x = 600.0;
        let input = pilot.input(&state);
        assert!(input.move_right && !input.move_left);

        state.ball.pos.x = 402.0;
        assert_eq!(pilot.input(&state), TickInput::default());
    }

    #[test]
    fn test_quits_when_cleared() {
        let mut state = GameState::new(&Config::default());
        assert!(!Autopilot::default().input(&state).quit);
        state.bricks.clear();
        assert!(Autopilot::default().input(&state).quit);

        let keep_going = Autopilot {
            quit_when_cleared: false,
            ..Default::default()
        };
        assert!(!keep_going.input(&state).quit);
    }
}
