//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors, rgba};
use crate::sim::{Color, World};

/// A primitive as the sketch emits it, before lowering to triangles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Point { pos: Vec2, color: [f32; 4] },
    Line { from: Vec2, to: Vec2, color: [f32; 4] },
    /// Axis-aligned filled rect, `min` is the top-left corner
    Rect { min: Vec2, size: Vec2, color: [f32; 4] },
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub clear: [f32; 4],
    /// Triangle list
    pub vertices: Vec<Vertex>,
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// One filled circle per body, in body order
pub fn body_frame(world: &World, segments: u32) -> Frame {
    let mut vertices = Vec::with_capacity(world.bodies.len() * segments as usize * 3);
    for body in &world.bodies {
        vertices.extend(circle(body.pos, body.radius(), rgba(body.color(), 255), segments));
    }

    Frame {
        clear: rgba(colors::BACKGROUND, 255),
        vertices,
    }
}

/// A frame that only clears to `color`
pub fn clear_frame(color: Color) -> Frame {
    Frame {
        clear: rgba(color, 255),
        vertices: Vec::new(),
    }
}

/// The hello window: nothing but a cornflower blue clear
pub fn hello_frame() -> Frame {
    clear_frame(colors::HELLO_BACKGROUND)
}

/// Lower primitives to a triangle list
///
/// Points become 1x1 quads and lines 1-unit-wide quads, so a renderer that
/// only knows triangles can draw them.
pub fn triangles(shapes: &[Shape]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(shapes.len() * 6);

    for shape in shapes {
        match *shape {
            Shape::Point { pos, color } => quad(&mut vertices, pos, Vec2::ONE, color),
            Shape::Rect { min, size, color } => quad(&mut vertices, min, size, color),
            Shape::Line { from, to, color } => {
                let dir = (to - from).normalize_or_zero();
                // Perpendicular for width
                let perp = Vec2::new(-dir.y, dir.x) * 0.5;

                let v1a = from + perp;
                let v1b = from - perp;
                let v2a = to + perp;
                let v2b = to - perp;

                // Two triangles
                vertices.push(Vertex::new(v1a.x, v1a.y, color));
                vertices.push(Vertex::new(v1b.x, v1b.y, color));
                vertices.push(Vertex::new(v2a.x, v2a.y, color));

                vertices.push(Vertex::new(v2a.x, v2a.y, color));
                vertices.push(Vertex::new(v1b.x, v1b.y, color));
                vertices.push(Vertex::new(v2b.x, v2b.y, color));
            }
        }
    }

    vertices
}

fn quad(vertices: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;

    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));

    vertices.push(Vertex::new(min.x, max.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Body;
    use crate::tuning::Tuning;

    #[test]
    fn test_circle_stays_on_radius() {
        let center = Vec2::new(100.0, 50.0);
        let vertices = circle(center, 10.0, [1.0; 4], 16);

        assert_eq!(vertices.len(), 16 * 3);
        for v in &vertices {
            let d = (Vec2::from(v.position) - center).length();
            assert!(d < 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_body_frame_uses_body_color() {
        let world = World::with_bodies(
            Tuning::default(),
            vec![
                Body::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 20.0, Color::new(255, 0, 0)),
                Body::new(Vec2::new(150.0, 50.0), Vec2::ZERO, 20.0, Color::new(0, 0, 255)),
            ],
        );

        let frame = body_frame(&world, 8);
        assert_eq!(frame.vertices.len(), 2 * 8 * 3);
        assert_eq!(frame.vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(frame.vertices[8 * 3].color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(frame.vertices[0].position, [50.0, 50.0]);
    }

    #[test]
    fn test_hello_frame_is_cornflower_blue() {
        let frame = hello_frame();
        assert_eq!(frame.clear, [100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0, 1.0]);
        assert!(frame.vertices.is_empty());
    }

    #[test]
    fn test_triangles_counts() {
        let color = [1.0; 4];
        let shapes = [
            Shape::Point { pos: Vec2::ZERO, color },
            Shape::Line {
                from: Vec2::ZERO,
                to: Vec2::new(10.0, 0.0),
                color,
            },
            Shape::Rect {
                min: Vec2::new(5.0, 5.0),
                size: Vec2::new(10.0, 20.0),
                color,
            },
        ];

        let vertices = triangles(&shapes);
        assert_eq!(vertices.len(), 18);
        // Rect corners
        assert_eq!(vertices[12].position, [5.0, 5.0]);
        assert_eq!(vertices[17].position, [15.0, 25.0]);
    }
}
