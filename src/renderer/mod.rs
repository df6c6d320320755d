//! Rendering support
//!
//! Turns simulation frames into colored triangle lists ready for a GPU
//! vertex buffer. Window and device setup belong to the embedding renderer.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{CLEAR_COLOR, frame_bytes, frame_vertices};
pub use vertex::Vertex;
