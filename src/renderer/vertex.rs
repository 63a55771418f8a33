//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// 8-bit RGB plus alpha to normalized RGBA
pub fn rgba(color: Color, alpha: u8) -> [f32; 4] {
    [
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        alpha as f32 / 255.0,
    ]
}

/// Colors for the demo scenes
pub mod colors {
    use crate::sim::Color;

    /// Hello window clear color (cornflower blue)
    pub const HELLO_BACKGROUND: Color = Color::new(100, 149, 237);
    /// Shape sketch clear color
    pub const SKETCH_BACKGROUND: Color = Color::new(0xA0, 0xA0, 0xA0);
    /// Ball scene clear color
    pub const BACKGROUND: Color = Color::new(16, 16, 24);
}
