//! Collision detection and response
//!
//! Bricks reflect the ball along the axis of least penetration: per axis the
//! closer brick edge tells which side the ball came from, and the axis with
//! the smaller of those two overlaps is the one that gets flipped.

use super::geometry::{Edges, intersects};
use super::state::{Ball, BounceAxis, Brick, Paddle};

/// Penetration of the ball past each brick edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Ball right edge past brick left edge
    pub left: f32,
    /// Brick right edge past ball left edge
    pub right: f32,
    /// Ball bottom edge past brick top edge
    pub top: f32,
    /// Brick bottom edge past ball top edge
    pub bottom: f32,
}

/// Which side the ball entered from and which axis to reflect on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceSide {
    pub from_left: bool,
    pub from_top: bool,
    pub axis: BounceAxis,
}

impl Overlap {
    pub fn between(ball: &Ball, brick: &Brick) -> Self {
        Self {
            left: ball.right() - brick.left(),
            right: brick.right() - ball.left(),
            top: ball.bottom() - brick.top(),
            bottom: brick.bottom() - ball.top(),
        }
    }

    pub fn side(&self) -> BounceSide {
        let from_left = self.left.abs() < self.right.abs();
        let from_top = self.top.abs() < self.bottom.abs();

        let min_x = if from_left { self.left } else { self.right };
        let min_y = if from_top { self.top } else { self.bottom };

        let axis = if min_x.abs() < min_y.abs() {
            BounceAxis::Horizontal
        } else {
            BounceAxis::Vertical
        };

        BounceSide {
            from_left,
            from_top,
            axis,
        }
    }
}

/// Bounce the ball up off the paddle. Horizontal direction depends only on
/// which half of the paddle was struck. Returns whether they touched.
pub fn resolve_paddle_ball(paddle: &Paddle, ball: &mut Ball) -> bool {
    if !intersects(paddle, ball) {
        return false;
    }

    ball.vel.y = -ball.speed;
    ball.vel.x = if ball.x() < paddle.x() {
        -ball.speed
    } else {
        ball.speed
    };
    true
}

/// Destroy the brick and reflect the ball on exactly one axis.
///
/// Returns the reflection axis, or `None` when they don't touch or the brick
/// was already destroyed.
pub fn resolve_brick_ball(brick: &mut Brick, ball: &mut Ball) -> Option<BounceAxis> {
    if brick.is_destroyed() || !intersects(brick, ball) {
        return None;
    }
    brick.destroy();

    let side = Overlap::between(ball, brick).side();
    match side.axis {
        BounceAxis::Horizontal => {
            ball.vel.x = if side.from_left {
                -ball.speed
            } else {
                ball.speed
            };
        }
        BounceAxis::Vertical => {
            ball.vel.y = if side.from_top {
                -ball.speed
            } else {
                ball.speed
            };
        }
    }
    Some(side.axis)
}

/// Index of the live brick touching the ball whose centre is closest to the
/// ball centre. Ties keep the earliest brick.
pub fn nearest_touching_brick(bricks: &[Brick], ball: &Ball) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, brick) in bricks.iter().enumerate() {
        if brick.is_destroyed() || !intersects(brick, ball) {
            continue;
        }
        let dist_sq = brick.pos.distance_squared(ball.pos);
        if best.is_none_or(|(_, d)| dist_sq < d) {
            best = Some((i, dist_sq));
        }
    }
    best.map(|(i, _)| i)
}
