//! Frame to triangle-list conversion
//!
//! Window coordinates (origin top-left, y down) are mapped to normalized
//! device coordinates (origin centre, y up) so the output can be uploaded
//! to a vertex buffer as-is.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::config::WindowConfig;
use crate::sim::Frame;

/// Triangle segments used for the ball
pub const BALL_SEGMENTS: u32 = 24;

/// Color the render target is cleared to before drawing a frame
pub const CLEAR_COLOR: [f32; 4] = colors::BACKGROUND;

/// Map a window-space point to normalized device coordinates
#[inline]
pub fn to_ndc(point: Vec2, window: &WindowConfig) -> Vec2 {
    Vec2::new(
        point.x / window.width * 2.0 - 1.0,
        1.0 - point.y / window.height * 2.0,
    )
}

/// Bricks first, then paddle, then ball (ball drawn on top)
pub fn frame_vertices(frame: &Frame, window: &WindowConfig) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity(frame.bricks.len() * 6 + 6 + (BALL_SEGMENTS * 3) as usize);

    for brick in &frame.bricks {
        vertices.extend(shapes::rect(
            brick.position,
            brick.width,
            brick.height,
            colors::BRICK,
        ));
    }
    vertices.extend(shapes::rect(
        frame.paddle.position,
        frame.paddle.width,
        frame.paddle.height,
        colors::PADDLE,
    ));
    vertices.extend(shapes::circle(
        frame.ball.position,
        frame.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    for v in &mut vertices {
        let ndc = to_ndc(Vec2::from(v.position), window);
        v.position = ndc.to_array();
    }
    vertices
}

/// Raw bytes for a vertex buffer upload
pub fn frame_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::GameState;

    #[test]
    fn test_entities_stand_out_from_clear_color() {
        let state = GameState::new(&Config::default());
        let vertices = frame_vertices(&state.frame(), &state.config.window);
        assert_eq!(CLEAR_COLOR[3], 1.0);
        assert!(vertices.iter().all(|v| v.color != CLEAR_COLOR));
    }

    #[test]
    fn test_to_ndc_corners() {
        let window = WindowConfig::default();
        assert_eq!(to_ndc(Vec2::ZERO, &window), Vec2::new(-1.0, 1.0));
        assert_eq!(
            to_ndc(Vec2::new(800.0, 600.0), &window),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(to_ndc(Vec2::new(400.0, 300.0), &window), Vec2::ZERO);
    }

    #[test]
    fn test_frame_vertex_layout() {
        let config = Config::default();
        let frame = GameState::new(&config).frame();
        let verts = frame_vertices(&frame, &config.window);
        assert_eq!(verts.len(), 44 * 6 + 6 + 24 * 3);
        assert_eq!(verts[0].color, colors::BRICK);
        assert_eq!(verts.last().map(|v| v.color), Some(colors::BALL));
        assert!(
            verts
                .iter()
                .all(|v| v.position.iter().all(|c| (-1.0..=1.0).contains(c)))
        );
    }

    #[test]
    fn test_frame_bytes_length() {
        let config = Config::default();
        let verts = frame_vertices(&GameState::new(&config).frame(), &config.window);
        assert_eq!(frame_bytes(&verts).len(), verts.len() * Vertex::STRIDE);
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
    }
}
