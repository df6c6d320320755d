//! Game configuration
//!
//! Window and entity dimensions are fixed for the lifetime of a game. A
//! `Config` is built once (defaults or a JSON file) and passed by reference
//! to every constructor.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::geometry::{Aabb, Edges, intersects};

/// How the ball resolves several bricks overlapping in the same tick
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum BrickHitPolicy {
    /// Every intersecting brick is destroyed and bounces the ball, in
    /// collection order. The last brick processed decides the final velocity.
    #[default]
    #[value(alias = "seq")]
    Sequential,
    /// Only the intersecting brick closest to the ball centre is destroyed
    /// and bounces the ball this tick.
    Nearest,
}

impl BrickHitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrickHitPolicy::Sequential => "sequential",
            BrickHitPolicy::Nearest => "nearest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Some(BrickHitPolicy::Sequential),
            "nearest" => Some(BrickHitPolicy::Nearest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Per-axis speed in pixels per tick
    pub speed: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal speed in pixels per tick
    pub speed: f32,
    /// Distance from the bottom window edge to the paddle centre
    pub bottom_offset: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            bottom_offset: PADDLE_BOTTOM_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub width: f32,
    pub height: f32,
    pub columns: u32,
    pub rows: u32,
    /// Gap between neighbouring bricks
    pub spacing: f32,
    /// Centre of the top-left brick
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            spacing: BRICK_SPACING,
            origin_x: BRICK_ORIGIN_X,
            origin_y: BRICK_ORIGIN_Y,
        }
    }
}

impl BrickConfig {
    pub fn count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Centre of the brick at the given grid cell
    pub fn cell_center(&self, column: u32, row: u32) -> (f32, f32) {
        (
            self.origin_x + column as f32 * (self.width + self.spacing),
            self.origin_y + row as f32 * (self.height + self.spacing),
        )
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickConfig,
    pub brick_hits: BrickHitPolicy,
}

/// Reasons a configuration could not be produced
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be > 0 (got {value})")))
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Paddle spawn centre
    pub fn paddle_start(&self) -> (f32, f32) {
        (
            self.window.width / 2.0,
            self.window.height - self.paddle.bottom_offset,
        )
    }

    /// Ball spawn centre
    pub fn ball_start(&self) -> (f32, f32) {
        (self.window.width / 2.0, self.window.height / 2.0)
    }

    /// Reject values that would break entity invariants
    pub fn check(&self) -> Result<(), ConfigError> {
        positive("window.width", self.window.width)?;
        positive("window.height", self.window.height)?;
        positive("ball.radius", self.ball.radius)?;
        positive("ball.speed", self.ball.speed)?;
        positive("paddle.width", self.paddle.width)?;
        positive("paddle.height", self.paddle.height)?;
        positive("paddle.speed", self.paddle.speed)?;
        positive("bricks.width", self.bricks.width)?;
        positive("bricks.height", self.bricks.height)?;

        if !(self.bricks.spacing.is_finite() && self.bricks.spacing >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "bricks.spacing must be >= 0 (got {})",
                self.bricks.spacing
            )));
        }
        if self.paddle.width > self.window.width {
            return Err(ConfigError::Invalid(format!(
                "paddle.width {} exceeds window.width {}",
                self.paddle.width, self.window.width
            )));
        }
        if self.ball.radius * 2.0 > self.window.width.min(self.window.height) {
            return Err(ConfigError::Invalid(format!(
                "ball.radius {} does not fit the window",
                self.ball.radius
            )));
        }

        let (_, paddle_y) = self.paddle_start();
        let half_h = self.paddle.height / 2.0;
        if !paddle_y.is_finite() || paddle_y - half_h < 0.0 || paddle_y + half_h > self.window.height
        {
            return Err(ConfigError::Invalid(format!(
                "paddle.bottom_offset {} places the paddle outside the window",
                self.paddle.bottom_offset
            )));
        }

        if self.bricks.count() > 0 {
            let b = &self.bricks;
            let first = Vec2::from(b.cell_center(0, 0));
            let last = Vec2::from(b.cell_center(b.columns - 1, b.rows - 1));
            let cell_half = Vec2::new(b.width / 2.0, b.height / 2.0);
            let grid = Aabb::new((first + last) / 2.0, (last - first) / 2.0 + cell_half);
            let (left, top, right, bottom) = (grid.left(), grid.top(), grid.right(), grid.bottom());
            if !(left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite())
                || left < 0.0
                || top < 0.0
                || right > self.window.width
                || bottom > self.window.height
            {
                return Err(ConfigError::Invalid(format!(
                    "brick grid ({left}, {top})..({right}, {bottom}) extends outside the window"
                )));
            }

            let ball = Aabb::new(Vec2::from(self.ball_start()), Vec2::splat(self.ball.radius));
            if intersects(&ball, &grid) {
                // The grid box is coarse; only a real brick under the ball is fatal
                let hit = (0..b.rows).any(|row| {
                    (0..b.columns).any(|col| {
                        let center = Vec2::from(b.cell_center(col, row));
                        let cell = Aabb::from_size(center, b.width, b.height);
                        intersects(&ball, &cell)
                    })
                });
                if hit {
                    return Err(ConfigError::Invalid(
                        "ball spawn position overlaps the brick grid".into(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Suspicious but playable values, returned as human-readable warnings.
    /// Call at startup and log each one with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.ball.speed >= self.ball.radius * 2.0 {
            w.push(format!(
                "ball.speed {} >= ball diameter {}; the ball may skip past thin obstacles",
                self.ball.speed,
                self.ball.radius * 2.0
            ));
        }
        if self.ball.speed >= self.bricks.height || self.ball.speed >= self.paddle.height {
            w.push(format!(
                "ball.speed {} is not small relative to brick/paddle height; tunneling possible",
                self.ball.speed
            ));
        }
        if self.bricks.count() == 0 {
            w.push("brick grid is empty; nothing to destroy".into());
        }
        if self.paddle.speed > self.ball.speed * 2.0 {
            w.push(format!(
                "paddle.speed {} is much faster than ball.speed {}",
                self.paddle.speed, self.ball.speed
            ));
        }
        w
    }

    /// Log every `validate` warning
    pub fn log_warnings(&self) {
        for warning in self.validate() {
            log::warn!("config: {warning}");
        }
    }
}
