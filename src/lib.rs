//! Breakout - A minimal ball-and-paddle arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, tick)
//! - `config`: Game dimensions and tuning, loadable from JSON
//! - `renderer`: Vertex generation from simulation frames
//! - `runner`: Single-threaded frame loop with pluggable input and output

pub mod config;
pub mod renderer;
pub mod runner;
pub mod sim;

pub use config::{BrickHitPolicy, Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Duration of one tick in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults (speed is per axis, per tick)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 8.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Distance from the bottom window edge to the paddle centre
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: u32 = 11;
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_SPACING: f32 = 3.0;
    /// Centre of the top-left brick
    pub const BRICK_ORIGIN_X: f32 = 85.0;
    pub const BRICK_ORIGIN_Y: f32 = 46.0;
}
