//! Fixed timestep simulation tick
//!
//! One tick, in fixed order: ball moves, paddle moves, paddle collision,
//! brick collisions, destroyed bricks pruned. Reordering changes bounce
//! outcomes.

use serde::{Deserialize, Serialize};

use super::collision::{nearest_touching_brick, resolve_brick_ball, resolve_paddle_ball};
use super::state::{Brick, GameEvent, GameState};
use crate::config::BrickHitPolicy;

/// Input sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Stop the loop after this tick has been presented
    pub quit: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub quit: bool,
}

impl TickReport {
    pub fn paddle_hit(&self) -> bool {
        self.events.contains(&GameEvent::PaddleHit)
    }

    pub fn bricks_destroyed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count()
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut events = Vec::new();

    for wall in state.ball.update(&state.config.window).into_iter().flatten() {
        events.push(GameEvent::WallBounce { wall });
    }

    state
        .paddle
        .update(input.move_left, input.move_right, state.config.window.width);

    if resolve_paddle_ball(&state.paddle, &mut state.ball) {
        log::debug!("tick {}: paddle hit at x={:.1}", state.time_ticks, state.ball.pos.x);
        events.push(GameEvent::PaddleHit);
    }

    match state.config.brick_hits {
        BrickHitPolicy::Sequential => {
            for brick in &mut state.bricks {
                if let Some(axis) = resolve_brick_ball(brick, &mut state.ball) {
                    events.push(GameEvent::BrickDestroyed { id: brick.id, axis });
                }
            }
        }
        BrickHitPolicy::Nearest => {
            if let Some(i) = nearest_touching_brick(&state.bricks, &state.ball) {
                let brick = &mut state.bricks[i];
                if let Some(axis) = resolve_brick_ball(brick, &mut state.ball) {
                    events.push(GameEvent::BrickDestroyed { id: brick.id, axis });
                }
            }
        }
    }

    let removed = prune_destroyed(&mut state.bricks);
    if removed > 0 {
        log::debug!(
            "tick {}: {} brick(s) destroyed, {} left",
            state.time_ticks,
            removed,
            state.bricks.len()
        );
    }

    state.time_ticks += 1;
    log::trace!(
        "tick {}: ball ({:.1}, {:.1}) vel ({}, {}) paddle x={:.1}",
        state.time_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.vel.x,
        state.ball.vel.y,
        state.paddle.pos.x
    );

    TickReport {
        events,
        quit: input.quit,
    }
}

/// Drop destroyed bricks, keeping the order of the rest. Returns how many were removed.
pub fn prune_destroyed(bricks: &mut Vec<Brick>) -> usize {
    let before = bricks.len();
    bricks.retain(|b| !b.is_destroyed());
    before - bricks.len()
}
