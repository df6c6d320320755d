//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame, no wall-clock time
//! - Stable iteration order (bricks in grid order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod frame;
pub mod geometry;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Overlap, resolve_brick_ball, resolve_paddle_ball};
pub use frame::{BallView, Frame, RectView};
pub use geometry::{Aabb, Edges, intersects};
pub use state::{Ball, BounceAxis, Brick, GameEvent, GameState, Paddle, Wall, spawn_bricks};
pub use tick::{TickInput, TickReport, prune_destroyed, tick};
