//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Edges;
use crate::config::{Config, WindowConfig};

/// One of the four window boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis along which a brick reflected the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceAxis {
    Horizontal,
    Vertical,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce { wall: Wall },
    PaddleHit,
    BrickDestroyed { id: u32, axis: BounceAxis },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Per-axis speed; every velocity component is always `±speed`
    pub speed: f32,
}

impl Ball {
    /// Ball at the window centre heading up and to the left
    pub fn new(config: &Config) -> Self {
        let (x, y) = config.ball_start();
        Self::at(Vec2::new(x, y), config)
    }

    pub fn at(pos: Vec2, config: &Config) -> Self {
        let speed = config.ball.speed;
        Self {
            pos,
            vel: Vec2::new(-speed, -speed),
            radius: config.ball.radius,
            speed,
        }
    }

    /// Move one tick, then point the velocity back inside on any wall that was crossed.
    ///
    /// Returns the walls bounced off (at most one per axis). Position is not
    /// clamped, so the ball may sit outside by up to one tick of travel.
    pub fn update(&mut self, window: &WindowConfig) -> [Option<Wall>; 2] {
        self.pos += self.vel;

        let x_wall = if self.left() < 0.0 {
            self.vel.x = self.speed;
            Some(Wall::Left)
        } else if self.right() > window.width {
            self.vel.x = -self.speed;
            Some(Wall::Right)
        } else {
            None
        };

        let y_wall = if self.top() < 0.0 {
            self.vel.y = self.speed;
            Some(Wall::Top)
        } else if self.bottom() > window.height {
            self.vel.y = -self.speed;
            Some(Wall::Bottom)
        } else {
            None
        };

        [x_wall, y_wall]
    }
}

impl Edges for Ball {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    /// Velocity applied on the next update (y is always 0)
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &Config) -> Self {
        let (x, y) = config.paddle_start();
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            width: config.paddle.width,
            height: config.paddle.height,
            speed: config.paddle.speed,
        }
    }

    /// Apply the velocity chosen last tick, then pick the next one from input.
    ///
    /// The move never leaves the paddle outside `[0, window_width]`. Velocity
    /// for the next tick is only set towards a wall the paddle is not yet
    /// touching.
    pub fn update(&mut self, move_left: bool, move_right: bool, window_width: f32) {
        self.pos += self.vel;

        let half_w = self.width / 2.0;
        if self.left() < 0.0 {
            self.pos.x = half_w;
        } else if self.right() > window_width {
            self.pos.x = window_width - half_w;
        }

        self.vel.x = if move_left && self.left() > 0.0 {
            -self.speed
        } else if move_right && self.right() < window_width {
            self.speed
        } else {
            0.0
        };
    }
}

impl Edges for Paddle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    destroyed: bool,
}

impl Brick {
    pub fn new(id: u32, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            id,
            pos,
            width,
            height,
            destroyed: false,
        }
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark destroyed. Returns false if it already was.
    pub fn destroy(&mut self) -> bool {
        !std::mem::replace(&mut self.destroyed, true)
    }
}

impl Edges for Brick {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Lay out the brick grid in row-major order, ids starting at 1
pub fn spawn_bricks(config: &Config) -> Vec<Brick> {
    let grid = &config.bricks;
    let mut bricks = Vec::with_capacity(grid.count());
    let mut id = 1;
    for row in 0..grid.rows {
        for column in 0..grid.columns {
            let (x, y) = grid.cell_center(column, row);
            bricks.push(Brick::new(id, Vec2::new(x, y), grid.width, grid.height));
            id += 1;
        }
    }
    bricks
}

/// Complete game state, exclusively owned by the loop driving it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks in grid order
    pub bricks: Vec<Brick>,
    /// Completed tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: *config,
            ball: Ball::new(config),
            paddle: Paddle::new(config),
            bricks: spawn_bricks(config),
            time_ticks: 0,
        }
    }

    /// No bricks remain
    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::at(Vec2::new(x, y), &Config::default());
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(&Config::default());
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(-8.0, -8.0));
        assert_eq!(state.paddle.pos, Vec2::new(400.0, 550.0));
        assert_eq!(state.paddle.vel, Vec2::ZERO);
        assert_eq!(state.bricks.len(), 44);
        assert_eq!(state.time_ticks, 0);
        assert!(!state.is_cleared());
    }

    #[test]
    fn test_brick_grid_order_and_ids() {
        let bricks = spawn_bricks(&Config::default());
        assert_eq!(bricks[0].id, 1);
        assert_eq!(bricks[0].pos, Vec2::new(85.0, 46.0));
        assert_eq!(bricks[1].pos, Vec2::new(148.0, 46.0));
        assert_eq!(bricks[11].pos, Vec2::new(85.0, 69.0));
        assert_eq!(bricks[43].id, 44);
        assert!(bricks.iter().all(|b| !b.is_destroyed()));
    }

    #[test]
    fn test_ball_moves_without_bounce() {
        let mut ball = ball_at(400.0, 300.0, Vec2::new(-8.0, -8.0));
        let walls = ball.update(&WindowConfig::default());
        assert_eq!(ball.pos, Vec2::new(392.0, 292.0));
        assert_eq!(walls, [None, None]);
        assert_eq!(ball.vel, Vec2::new(-8.0, -8.0));
    }

    #[test]
    fn test_ball_bounces_off_left_and_top() {
        let mut ball = ball_at(15.0, 15.0, Vec2::new(-8.0, -8.0));
        let walls = ball.update(&WindowConfig::default());
        assert_eq!(walls, [Some(Wall::Left), Some(Wall::Top)]);
        assert_eq!(ball.vel, Vec2::new(8.0, 8.0));
        // not clamped back inside
        assert_eq!(ball.pos, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_ball_bounces_off_right_and_bottom() {
        let mut ball = ball_at(785.0, 585.0, Vec2::new(8.0, 8.0));
        let walls = ball.update(&WindowConfig::default());
        assert_eq!(walls, [Some(Wall::Right), Some(Wall::Bottom)]);
        assert_eq!(ball.vel, Vec2::new(-8.0, -8.0));
    }

    #[test]
    fn test_ball_left_wall_forces_positive_even_if_already_positive() {
        // Still outside after bouncing; velocity stays +speed, never flips back
        let mut ball = ball_at(2.0, 300.0, Vec2::new(8.0, 8.0));
        ball.update(&WindowConfig::default());
        assert_eq!(ball.vel.x, 8.0);
        ball.pos.x = -3.0;
        ball.update(&WindowConfig::default());
        assert_eq!(ball.vel.x, 8.0);
    }

    #[test]
    fn test_paddle_moves_and_stops() {
        let config = Config::default();
        let mut paddle = Paddle::new(&config);

        paddle.update(true, false, 800.0);
        // first tick only sets velocity
        assert_eq!(paddle.pos.x, 400.0);
        assert_eq!(paddle.vel.x, -6.0);

        paddle.update(true, false, 800.0);
        assert_eq!(paddle.pos.x, 394.0);

        paddle.update(false, false, 800.0);
        assert_eq!(paddle.pos.x, 388.0);
        assert_eq!(paddle.vel.x, 0.0);

        paddle.update(false, false, 800.0);
        assert_eq!(paddle.pos.x, 388.0);
    }

    #[test]
    fn test_paddle_left_wins_when_both_held() {
        let mut paddle = Paddle::new(&Config::default());
        paddle.update(true, true, 800.0);
        assert_eq!(paddle.vel.x, -6.0);
    }

    #[test]
    fn test_paddle_stays_inside_left_wall() {
        let mut paddle = Paddle::new(&Config::default());
        for _ in 0..200 {
            paddle.update(true, false, 800.0);
            assert!(paddle.left() >= 0.0);
        }
        assert_eq!(paddle.left(), 0.0);
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_paddle_stays_inside_right_wall() {
        let mut paddle = Paddle::new(&Config::default());
        for _ in 0..200 {
            paddle.update(false, true, 800.0);
            assert!(paddle.right() <= 800.0);
        }
        assert_eq!(paddle.right(), 800.0);
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_paddle_can_leave_wall() {
        let mut paddle = Paddle::new(&Config::default());
        paddle.pos.x = 30.0;
        paddle.update(true, false, 800.0);
        assert_eq!(paddle.vel.x, 0.0);
        paddle.update(false, true, 800.0);
        assert_eq!(paddle.vel.x, 6.0);
    }

    #[test]
    fn test_brick_destroy_is_one_shot() {
        let mut brick = Brick::new(7, Vec2::new(100.0, 100.0), 60.0, 20.0);
        assert!(!brick.is_destroyed());
        assert!(brick.destroy());
        assert!(brick.is_destroyed());
        assert!(!brick.destroy());
        assert!(brick.is_destroyed());
    }
}
